//! Breed catalog and its typed response envelope

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{DomainError, FilterLetter};

/// Status value the catalog API reports on success.
pub const SUCCESS_STATUS: &str = "success";

/// Top-level shape of a catalog response: `{ "status": ..., "message": { ... } }`.
///
/// Both fields are optional here so that a missing field is reported as
/// [`DomainError::UnexpectedShape`] instead of a decode failure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl CatalogEnvelope {
    /// Convert an arbitrary JSON document into an envelope.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        serde_json::from_value(value).map_err(|e| {
            debug!("envelope rejected: {}", e);
            DomainError::UnexpectedShape
        })
    }
}

/// Breed name to sub-breed names, in the order the API listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl BreedCatalog {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Validate an envelope and extract the catalog.
    ///
    /// Requires `status == "success"` and `message` to be a JSON object.
    /// A breed whose value is not an array gets no sub-breeds; non-string
    /// array elements are skipped.
    pub fn from_envelope(envelope: CatalogEnvelope) -> Result<Self, DomainError> {
        if envelope.status.as_deref() != Some(SUCCESS_STATUS) {
            return Err(DomainError::UnexpectedShape);
        }
        let Some(Value::Object(message)) = envelope.message else {
            return Err(DomainError::UnexpectedShape);
        };

        let entries = message
            .into_iter()
            .map(|(breed, subs)| {
                let subs = match subs {
                    Value::Array(items) => items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => Some(s),
                            _ => None,
                        })
                        .collect(),
                    other => {
                        debug!("breed {}: non-array sub-breeds {}, using none", breed, other);
                        Vec::new()
                    }
                };
                (breed, subs)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Parse a catalog straight from a decoded JSON document.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        Self::from_envelope(CatalogEnvelope::from_value(value)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(breed, subs)| (breed.as_str(), subs.as_slice()))
    }

    /// Sub-breeds of a breed, if the breed exists.
    pub fn sub_breeds(&self, breed: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == breed)
            .map(|(_, subs)| subs.as_slice())
    }

    /// Entries whose breed name starts with `letter`, in catalog order.
    pub fn starting_with(&self, letter: FilterLetter) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(move |(breed, _)| letter.matches(breed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_success_response_when_parsing_then_keeps_order_and_subs() {
        let catalog = BreedCatalog::from_value(json!({
            "status": "success",
            "message": { "boxer": [], "bulldog": ["french", "english"], "akita": [] }
        }))
        .unwrap();

        let names: Vec<&str> = catalog.iter().map(|(b, _)| b).collect();
        assert_eq!(names, vec!["boxer", "bulldog", "akita"]);
        assert_eq!(
            catalog.sub_breeds("bulldog").unwrap(),
            &["french".to_string(), "english".to_string()]
        );
    }

    #[test]
    fn given_error_status_when_parsing_then_unexpected_shape() {
        let err = BreedCatalog::from_value(json!({ "status": "error" })).unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedShape));
        assert_eq!(err.to_string(), "Unexpected API shape.");
    }

    #[test]
    fn given_null_message_when_parsing_then_unexpected_shape() {
        let err =
            BreedCatalog::from_value(json!({ "status": "success", "message": null })).unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedShape));
    }

    #[test]
    fn given_array_message_when_parsing_then_unexpected_shape() {
        let err =
            BreedCatalog::from_value(json!({ "status": "success", "message": ["boxer"] }))
                .unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedShape));
    }

    #[test]
    fn given_non_object_document_when_parsing_then_unexpected_shape() {
        for doc in [json!(null), json!([1, 2]), json!("success"), json!({ "status": 1 })] {
            let err = BreedCatalog::from_value(doc).unwrap_err();
            assert!(matches!(err, DomainError::UnexpectedShape));
        }
    }

    #[test]
    fn given_non_array_sub_breeds_when_parsing_then_coerced_to_empty() {
        let catalog = BreedCatalog::from_value(json!({
            "status": "success",
            "message": { "beagle": "oops", "briard": null, "basenji": ["x", 3, "y"] }
        }))
        .unwrap();

        assert!(catalog.sub_breeds("beagle").unwrap().is_empty());
        assert!(catalog.sub_breeds("briard").unwrap().is_empty());
        assert_eq!(
            catalog.sub_breeds("basenji").unwrap(),
            &["x".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn given_letter_when_filtering_then_only_matching_breeds() {
        let catalog = BreedCatalog::new(vec![
            ("boxer".into(), vec![]),
            ("akita".into(), vec![]),
            ("Beagle".into(), vec![]),
            ("bulldog".into(), vec![]),
        ]);
        let letter = FilterLetter::resolve(Some("b")).unwrap();

        let names: Vec<&str> = catalog.starting_with(letter).map(|(b, _)| b).collect();
        assert_eq!(names, vec!["boxer", "bulldog"]);
    }
}

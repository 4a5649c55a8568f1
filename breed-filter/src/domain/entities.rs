//! Domain entities: core data structures

use std::fmt;

use crate::domain::DomainError;

/// Letter used when no argument is given.
pub const DEFAULT_LETTER: char = 'b';

/// Single lowercase ASCII letter that breed names are filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterLetter(char);

impl FilterLetter {
    /// Resolve the filter letter from an optional raw argument.
    ///
    /// Only the first character of `raw` is considered. It is lowercased with
    /// full Unicode case mapping and must then be exactly one character in `a..=z`.
    /// A missing argument, or one without any character, resolves to [`DEFAULT_LETTER`].
    ///
    /// # Examples
    /// ```
    /// use breed_filter::domain::FilterLetter;
    ///
    /// assert_eq!(FilterLetter::resolve(None).unwrap().as_char(), 'b');
    /// assert_eq!(FilterLetter::resolve(Some("Mastiff")).unwrap().as_char(), 'm');
    /// assert!(FilterLetter::resolve(Some("7")).is_err());
    /// ```
    pub fn resolve(raw: Option<&str>) -> Result<Self, DomainError> {
        let Some(first) = raw.and_then(|r| r.chars().next()) else {
            return Ok(Self(DEFAULT_LETTER));
        };

        let mut lowered = first.to_lowercase();
        match (lowered.next(), lowered.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => Ok(Self(c)),
            _ => Err(DomainError::InvalidLetter {
                input: raw.unwrap_or_default().to_string(),
            }),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Whether a stored breed name starts with this letter.
    pub fn matches(self, name: &str) -> bool {
        name.starts_with(self.0)
    }
}

impl Default for FilterLetter {
    fn default() -> Self {
        Self(DEFAULT_LETTER)
    }
}

impl fmt::Display for FilterLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A breed that matched the filter letter, with its sub-breeds in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedBreed {
    pub name: String,
    pub sub_breeds: Vec<String>,
}

impl fmt::Display for MatchedBreed {
    /// Renders `Breed` or `Breed (sub-breeds: Sub1, Sub2)`, title-cased.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", title_case(&self.name))?;
        if !self.sub_breeds.is_empty() {
            let subs = self
                .sub_breeds
                .iter()
                .map(|s| title_case(s))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " (sub-breeds: {subs})")?;
        }
        Ok(())
    }
}

/// Title-case a name segment by segment, splitting on `-`.
///
/// The first character of each segment is uppercased and the remainder lowercased.
/// Empty segments are kept, so `"a--b"` becomes `"A--B"`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_argument_when_resolving_then_defaults_to_b() {
        assert_eq!(FilterLetter::resolve(None).unwrap().as_char(), 'b');
    }

    #[test]
    fn given_empty_argument_when_resolving_then_defaults_to_b() {
        assert_eq!(FilterLetter::resolve(Some("")).unwrap().as_char(), 'b');
    }

    #[test]
    fn given_word_when_resolving_then_uses_first_character() {
        assert_eq!(FilterLetter::resolve(Some("Poodle")).unwrap().as_char(), 'p');
    }

    #[test]
    fn given_dotted_capital_i_when_resolving_then_rejects_multi_char_lowercase() {
        // 'İ' lowercases to "i\u{307}"
        let err = FilterLetter::resolve(Some("İ")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLetter { .. }));
    }

    #[test]
    fn given_invalid_argument_when_resolving_then_error_carries_full_input() {
        let err = FilterLetter::resolve(Some("42nd")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a single letter A–Z (e.g., \"breed-filter m\"). Got: \"42nd\""
        );
    }

    #[test]
    fn given_hyphenated_name_when_title_casing_then_each_segment_capitalized() {
        assert_eq!(title_case("french-bulldog"), "French-Bulldog");
        assert_eq!(title_case("sHIBA"), "Shiba");
        assert_eq!(title_case("a--b"), "A--B");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn given_title_cased_name_when_title_casing_again_then_unchanged() {
        for name in ["french-bulldog", "germanshepherd", "st-bernard", "x"] {
            let once = title_case(name);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn given_breed_with_sub_breeds_when_displaying_then_lists_them() {
        let breed = MatchedBreed {
            name: "bulldog".into(),
            sub_breeds: vec!["english".into(), "french".into()],
        };
        assert_eq!(breed.to_string(), "Bulldog (sub-breeds: English, French)");
    }

    #[test]
    fn given_breed_without_sub_breeds_when_displaying_then_only_name() {
        let breed = MatchedBreed {
            name: "boxer".into(),
            sub_breeds: vec![],
        };
        assert_eq!(breed.to_string(), "Boxer");
    }
}

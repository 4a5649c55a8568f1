//! Locale-aware name ordering
//!
//! Breed and sub-breed names are ordered with the `en` collation at primary
//! strength: case and accents do not affect the order.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;

use crate::application::{ApplicationError, ApplicationResult};

pub struct BreedCollator {
    inner: CollatorBorrowed<'static>,
}

impl BreedCollator {
    /// Create the `en` base-sensitivity collator from compiled ICU data.
    pub fn new() -> ApplicationResult<Self> {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Primary);

        let inner = Collator::try_new(locale!("en").into(), options).map_err(|e| {
            ApplicationError::Config {
                message: format!("load collation data: {e}"),
            }
        })?;
        Ok(Self { inner })
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.inner.compare(left, right)
    }

    /// Stable in-place sort using this collation.
    pub fn sort<S: AsRef<str>>(&self, names: &mut [S]) {
        names.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

impl fmt::Debug for BreedCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreedCollator")
            .field("locale", &"en")
            .field("strength", &"primary")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_names_when_sorting_then_case_is_ignored() {
        let collator = BreedCollator::new().unwrap();
        let mut names = vec!["bulldog", "Boxer", "basenji"];
        collator.sort(&mut names);
        assert_eq!(names, vec!["basenji", "Boxer", "bulldog"]);
    }

    #[test]
    fn given_accented_names_when_sorting_then_accent_is_ignored() {
        let collator = BreedCollator::new().unwrap();
        let mut names = vec!["eb".to_string(), "éa".to_string()];
        collator.sort(&mut names);
        assert_eq!(names, vec!["éa".to_string(), "eb".to_string()]);
    }

    #[test]
    fn given_case_variants_when_comparing_then_equal() {
        let collator = BreedCollator::new().unwrap();
        assert_eq!(collator.compare("hound", "HOUND"), Ordering::Equal);
        assert_eq!(collator.compare("akita", "boxer"), Ordering::Less);
    }

    #[test]
    fn given_equal_keys_when_sorting_then_order_is_stable() {
        let collator = BreedCollator::new().unwrap();
        let mut names = vec!["Pug", "akita", "pug"];
        collator.sort(&mut names);
        assert_eq!(names, vec!["akita", "Pug", "pug"]);
    }
}

//! Breed report service
//!
//! Fetches the catalog, keeps the breeds starting with the filter letter,
//! orders them by collation and renders the numbered report.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, BreedCollator};
use crate::domain::{BreedCatalog, FilterLetter, MatchedBreed};
use crate::infrastructure::traits::CatalogSource;

/// Outcome of filtering the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Matching breeds in display order (never empty).
    Breeds(Vec<MatchedBreed>),
    /// Nothing starts with the letter.
    NoMatches(FilterLetter),
}

impl Report {
    /// Output lines; `NoMatches` renders as a single sentence.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::Breeds(breeds) => breeds
                .iter()
                .enumerate()
                .map(|(idx, breed)| format!("{}. {}", idx + 1, breed))
                .collect(),
            Report::NoMatches(letter) => {
                vec![format!("No breeds found starting with \"{letter}\".")]
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Service turning a catalog into a filtered, sorted report.
pub struct BreedReportService {
    source: Arc<dyn CatalogSource>,
    collator: BreedCollator,
}

impl BreedReportService {
    pub fn new(source: Arc<dyn CatalogSource>, collator: BreedCollator) -> Self {
        Self { source, collator }
    }

    /// Fetch the catalog once and build the report for `letter`.
    #[instrument(skip(self))]
    pub async fn run(&self, letter: FilterLetter) -> ApplicationResult<Report> {
        let catalog = self.source.fetch().await?;
        debug!("run: catalog has {} breeds", catalog.len());
        Ok(self.build(&catalog, letter))
    }

    /// Filter and sort without any I/O.
    pub fn build(&self, catalog: &BreedCatalog, letter: FilterLetter) -> Report {
        let mut breeds: Vec<MatchedBreed> = catalog
            .starting_with(letter)
            .map(|(name, subs)| {
                let mut sub_breeds = subs.to_vec();
                self.collator.sort(&mut sub_breeds);
                MatchedBreed {
                    name: name.to_string(),
                    sub_breeds,
                }
            })
            .collect();

        if breeds.is_empty() {
            debug!("build: no breeds start with {}", letter);
            return Report::NoMatches(letter);
        }

        breeds.sort_by(|a, b| self.collator.compare(&a.name, &b.name));
        debug!("build: {} breeds start with {}", breeds.len(), letter);
        Report::Breeds(breeds)
    }
}

impl fmt::Debug for BreedReportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreedReportService")
            .field("collator", &self.collator)
            .finish_non_exhaustive()
    }
}

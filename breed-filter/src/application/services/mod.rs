//! Application services

pub mod report;

pub use report::{BreedReportService, Report};

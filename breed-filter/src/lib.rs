//! List dog breeds starting with a given letter.
//!
//! The catalog is fetched once from the dog breed API, filtered by the first
//! letter of each breed, ordered with `en` collation and rendered as a numbered
//! list with title-cased sub-breeds.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

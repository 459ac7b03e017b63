//! mob-core: Core library for creature drop tables
//!
//! This library provides functionality to:
//! - Fetch the raw drop table text from a file or a set of data roots
//! - Parse the comma-separated text into flat records
//! - Merge repeated rows into one record per creature with unique drops
//! - Filter merged records by level range and free-text search
//! - Compute the health-per-experience display stat

pub mod catalog;
pub mod error;
pub mod filter;
pub mod merger;
pub mod parser;
pub mod record;
pub mod source;
pub mod stat;

pub use catalog::{Card, Catalog};
pub use error::{Error, Result};
pub use filter::{filter_records, FilterQuery, LevelBounds, DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL};
pub use merger::merge_records;
pub use parser::parse_records;
pub use record::{Field, MergedRecord, RawRecord, EXPECTED_HEADERS};
pub use source::{DataSource, DirectorySource, FileSource};
pub use stat::{hp_per_exp, DerivedStat};

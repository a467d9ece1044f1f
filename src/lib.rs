//! `breach-schema` — normalize breach-incident tables and classify severity.
//!
//! # Flow
//! 1. Load data from any source into a [`table::Table`] (caller's concern;
//!    [`table::Table::from_rows`] and [`table::Table::from_json_records`] help).
//! 2. Normalize column names and types ([`schema::normalizer::normalize`]).
//! 3. Read typed rows ([`table::Table::records`]) and label each one
//!    ([`severity::classifier::classify`]).
//!
//! Both steps are pure: no I/O and no shared state, so callers may split rows
//! across threads freely.

pub mod models;
pub mod schema;
pub mod severity;
pub mod table;

pub use models::{BreachRecord, Severity, Value};
pub use schema::normalizer::{normalize, normalize_records};
pub use severity::classifier::{classify, classify_with};
pub use severity::thresholds::SeverityThresholds;
pub use table::{Column, Table};

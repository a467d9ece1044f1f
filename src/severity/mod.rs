//! Severity classification of breach records.
//!
//! - [`thresholds`] — the record-count boundaries between labels, with built-in defaults.
//! - [`classifier`] — maps a nullable record count to a [`Severity`](crate::models::Severity).

pub mod classifier;
pub mod thresholds;

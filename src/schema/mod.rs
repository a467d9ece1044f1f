//! Canonical breach schema: column aliasing, required-column backfill and
//! lenient type coercion.
//!
//! - [`aliases`] — maps known source column names to canonical names.
//! - [`coerce`] — per-cell parsing that degrades to missing instead of failing.
//! - [`normalizer`] — entry point that applies both to a whole [`Table`](crate::table::Table).

pub mod aliases;
pub mod coerce;
pub mod normalizer;

/// Columns guaranteed to exist after normalization, in backfill order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["year", "industry", "attack_vector", "records_exposed"];

/// Columns coerced to nullable integers.
pub const NUMERIC_COLUMNS: [&str; 2] = ["year", "records_exposed"];

/// Columns coerced to trimmed strings when present.
pub const TEXT_COLUMNS: [&str; 4] = ["industry", "attack_vector", "org_size", "country"];

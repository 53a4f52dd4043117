//! Quote-aware scanners for the `VALUES` section of a seed script.
//!
//! The seed dataset ships as one big multi-row `INSERT INTO ... VALUES`
//! statement. Splitting it with plain `str::split` corrupts the data: market
//! names contain commas and parens, JSONB payloads contain commas, braces and
//! brackets, and string literals escape quotes by doubling. The two scanners
//! here do the split honestly:
//!
//! - [`split_rows`] walks the text after the `VALUES` keyword and yields the
//!   content of each balanced top-level `(...)` group.
//! - [`split_fields`] splits one such row into normalized field values.
//!
//! Both track string literals (with `''` and backslash escapes) and nesting
//! depth, and report malformed input as a [`ScanError`] instead of guessing.

mod field;
mod row;

pub use field::split_fields;
pub use row::{Rows, ScanError, split_rows};

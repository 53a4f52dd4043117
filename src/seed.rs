//! Read and write the dataset's SQL seed script.
//!
//! The published dataset is one multi-row `INSERT INTO "public"."pasar_malams"
//! (...) VALUES ...;` script. [`parse_seed`] turns that text back into rows of
//! normalized field values, collecting per-row problems instead of aborting or
//! silently dropping data, and [`write_seed`] renders rows of [`SeedValue`]s
//! back into the same script layout.

mod literal;
mod reader;
mod table;
mod writer;

pub use literal::SeedValue;
pub use reader::{ParsedSeed, RowError, RowIssue, parse_seed};
pub use table::{Columns, SeedError, SeedSchema};
pub use writer::write_seed;

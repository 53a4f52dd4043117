//! Seed script writer.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use super::literal::SeedValue;
use super::table::{SeedError, SeedSchema, quote_identifier};

/// Column names written per line in the generated column list.
const COLUMNS_PER_LINE: usize = 4;

/// Render rows into a complete seed script.
///
/// The layout matches the published dataset: a comment header carrying
/// `generated_at` and the record count, the `INSERT INTO` with the quoted
/// column list, one `(...)` tuple per row joined by `,\n`, a closing `;`
/// and an end marker comment. `generated_at` is any timestamp text the
/// caller wants in the header; the crate does not read clocks.
///
/// # Errors
/// Returns [`SeedError::RowWidth`] when a row's length does not match the
/// schema's column count. Nothing is rendered in that case.
pub fn write_seed(
    schema: &SeedSchema,
    rows: &[Vec<SeedValue>],
    generated_at: &str,
) -> Result<String, SeedError> {
    let expected = schema.columns().len();
    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(SeedError::RowWidth {
                row,
                expected,
                found: values.len(),
            });
        }
    }

    let mut sql = String::new();
    writeln!(sql, "-- SQL Seed Script for {} table", schema.table()).unwrap();
    writeln!(sql, "-- Generated on {generated_at}").unwrap();
    writeln!(sql, "-- Total records: {}", rows.len()).unwrap();
    sql.push('\n');

    write!(sql, "INSERT INTO {} (", schema.qualified_name()).unwrap();
    for (index, name) in schema.columns().iter().enumerate() {
        if index == 0 {
            sql.push_str("\n    ");
        } else if index % COLUMNS_PER_LINE == 0 {
            sql.push_str(",\n    ");
        } else {
            sql.push_str(", ");
        }
        sql.push_str(&quote_identifier(name));
    }
    sql.push_str("\n) VALUES\n\n");

    for (index, values) in rows.iter().enumerate() {
        if index > 0 {
            sql.push_str(",\n");
        }
        sql.push('(');
        for (position, value) in values.iter().enumerate() {
            if position > 0 {
                sql.push_str(", ");
            }
            write!(sql, "{value}").unwrap();
        }
        sql.push(')');
    }
    sql.push_str(";\n\n-- End of seed script\n");
    Ok(sql)
}

//! Seed script reader: locate the `VALUES` clause and recover the rows.

use alloc::string::String;
use alloc::vec::Vec;

use crate::scan::{ScanError, split_fields, split_rows};

use super::table::{Columns, SeedError};

/// How many characters of a rejected row are kept in its report.
const PREVIEW_CHARS: usize = 120;

/// Why one tokenized row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The row split into the wrong number of fields for the column list.
    #[error("Expected {expected} fields, found {found}")]
    Width {
        /// Number of fields the column list requires.
        expected: usize,
        /// Number of fields the row actually split into.
        found: usize,
    },
    /// The row, or the block tail following the last good row, is
    /// structurally malformed.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// One rejected piece of the script: where it sat, how it starts, and what
/// was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// Zero-based position among the tokenized rows.
    pub index: usize,
    /// The first characters of the offending text.
    pub preview: String,
    /// Why it was rejected.
    pub error: RowError,
}

/// Everything [`parse_seed`] recovered from a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSeed {
    /// Rows that split cleanly into the expected number of fields, in
    /// script order.
    pub rows: Vec<Vec<String>>,
    /// Rows, or one trailing fragment, that had to be rejected.
    pub issues: Vec<RowIssue>,
}

/// Read the rows of a seed script back into normalized field values.
///
/// The script is scanned for its `VALUES` keyword, skipping `--` and
/// `/* */` comments, string literals and quoted identifiers on the way.
/// Everything after the keyword is tokenized into rows; each row is split
/// into fields and checked against `columns`. A row that fails to split or
/// has the wrong width becomes a [`RowIssue`] carrying its position and a
/// short preview, and parsing moves on, so one damaged row never shifts the
/// rows after it out of column alignment.
///
/// # Errors
/// Returns [`SeedError::ValuesNotFound`] when the script has no `VALUES`
/// keyword at all. Structural damage after the keyword is not fatal; it is
/// reported through [`ParsedSeed::issues`].
pub fn parse_seed(sql: &str, columns: &Columns) -> Result<ParsedSeed, SeedError> {
    let body = values_body(sql).ok_or(SeedError::ValuesNotFound)?;
    let body = body.trim();
    let body = body.strip_suffix(';').unwrap_or(body);

    let mut rows = Vec::new();
    let mut issues = Vec::new();
    let mut index = 0;
    for outcome in split_rows(body) {
        match outcome {
            Ok(row) => {
                match split_fields(row) {
                    Ok(fields) if fields.len() == columns.len() => rows.push(fields),
                    Ok(fields) => issues.push(RowIssue {
                        index,
                        preview: preview(row),
                        error: RowError::Width {
                            expected: columns.len(),
                            found: fields.len(),
                        },
                    }),
                    Err(error) => issues.push(RowIssue {
                        index,
                        preview: preview(row),
                        error: error.into(),
                    }),
                }
                index += 1;
            }
            Err(error) => issues.push(RowIssue {
                index,
                preview: preview(&body[error.position()..]),
                error: error.into(),
            }),
        }
    }
    Ok(ParsedSeed { rows, issues })
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => String::from(&text[..end]),
        None => String::from(text),
    }
}

/// Everything after the first `VALUES` keyword that sits outside string
/// literals, quoted identifiers and comments.
fn values_body(sql: &str) -> Option<&str> {
    let bytes = sql.as_bytes();
    let mut at = 0;
    while at < bytes.len() {
        let byte = bytes[at];
        if byte == b'\'' || byte == b'"' {
            at = skip_quoted(bytes, at);
        } else if byte == b'-' && bytes.get(at + 1) == Some(&b'-') {
            at += 2;
            while at < bytes.len() && bytes[at] != b'\n' {
                at += 1;
            }
        } else if byte == b'/' && bytes.get(at + 1) == Some(&b'*') {
            at += 2;
            while at + 1 < bytes.len() && !(bytes[at] == b'*' && bytes[at + 1] == b'/') {
                at += 1;
            }
            at = (at + 2).min(bytes.len());
        } else if (byte == b'V' || byte == b'v') && keyword_at(bytes, at, b"VALUES") {
            return Some(&sql[at + b"VALUES".len()..]);
        } else {
            at += 1;
        }
    }
    None
}

/// Skip a quoted region opened at `start`; the closing quote may be escaped
/// by doubling. Returns the index just past the region.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut at = start + 1;
    while at < bytes.len() {
        if bytes[at] == quote {
            if bytes.get(at + 1) == Some(&quote) {
                at += 2;
                continue;
            }
            return at + 1;
        }
        at += 1;
    }
    bytes.len()
}

/// Whether `keyword` occurs at `at` as a standalone word, ignoring case.
fn keyword_at(bytes: &[u8], at: usize, keyword: &[u8]) -> bool {
    let end = at + keyword.len();
    let Some(candidate) = bytes.get(at..end) else {
        return false;
    };
    if !candidate.eq_ignore_ascii_case(keyword) {
        return false;
    }
    let before_ok = at == 0 || !is_ident_byte(bytes[at - 1]);
    let after_ok = end == bytes.len() || !is_ident_byte(bytes[end]);
    before_ok && after_ok
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    const SCRIPT: &str = "\
-- SQL Seed Script for pasar_malams table
-- Generated on 2024-06-01 00:00:00
-- Total records: 2

INSERT INTO \"public\".\"pasar_malams\" (
    \"id\", \"name\", \"tags\"
) VALUES

('ps-1', 'Pasar Malam Taman Connaught', '[\"food\"]'::jsonb),
('ps-2', 'It''s Pasar Malam OUG', NULL);

-- End of seed script
";

    fn tag_columns() -> Columns {
        Columns::new(["id", "name", "tags"]).expect("distinct names")
    }

    #[test]
    fn reads_rows_from_a_full_script() {
        let parsed = parse_seed(SCRIPT, &tag_columns()).expect("script has VALUES");
        assert!(parsed.issues.is_empty());
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0], [
            "ps-1",
            "Pasar Malam Taman Connaught",
            "[\"food\"]"
        ]);
        assert_eq!(parsed.rows[1], ["ps-2", "It's Pasar Malam OUG", ""]);
    }

    #[test]
    fn values_inside_comments_and_literals_do_not_count() {
        let sql = "-- VALUES in a comment\n/* VALUES again */\nINSERT INTO t (\"VALUES\") VALUES ('x')";
        let columns = Columns::new(["only"]).expect("distinct names");
        let parsed = parse_seed(sql, &columns).expect("real VALUES follows the fakes");
        assert_eq!(parsed.rows, [["x"]]);
    }

    #[test]
    fn values_must_be_a_standalone_word() {
        let columns = tag_columns();
        assert_eq!(
            parse_seed("INSERT INTO t (a) XVALUES ('x')", &columns),
            Err(SeedError::ValuesNotFound)
        );
        assert_eq!(
            parse_seed("SELECT 1", &columns),
            Err(SeedError::ValuesNotFound)
        );
    }

    #[test]
    fn keyword_match_ignores_case() {
        let columns = Columns::new(["only"]).expect("distinct names");
        let parsed = parse_seed("insert into t (a) values ('x');", &columns).expect("lowercase");
        assert_eq!(parsed.rows, [["x"]]);
    }

    #[test]
    fn a_short_row_is_reported_and_skipped() {
        let sql = "VALUES ('a', 'b', 'c'), ('only-two', 'fields'), ('d', 'e', 'f');";
        let parsed = parse_seed(sql, &tag_columns()).expect("has VALUES");
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[1], ["d", "e", "f"]);
        assert_eq!(parsed.issues.len(), 1);
        let issue = &parsed.issues[0];
        assert_eq!(issue.index, 1);
        assert_eq!(issue.preview, "'only-two', 'fields'");
        assert_eq!(issue.error, RowError::Width {
            expected: 3,
            found: 2
        });
    }

    #[test]
    fn a_wide_row_is_reported_and_skipped() {
        let sql = "VALUES ('a', 'b', 'c', 'extra');";
        let parsed = parse_seed(sql, &tag_columns()).expect("has VALUES");
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.issues[0].error, RowError::Width {
            expected: 3,
            found: 4
        });
    }

    #[test]
    fn a_truncated_tail_is_reported_with_its_preview() {
        let sql = "VALUES ('a', 'b', 'c'), ('broken";
        let parsed = parse_seed(sql, &tag_columns()).expect("has VALUES");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.issues.len(), 1);
        let issue = &parsed.issues[0];
        assert_eq!(issue.index, 1);
        assert_eq!(issue.preview, "'broken");
        assert_eq!(
            issue.error,
            RowError::Scan(ScanError::UnterminatedString { pos: 18 })
        );
    }

    #[test]
    fn an_unclosed_row_is_reported_from_its_opening_paren() {
        let sql = "VALUES ('a', 'b', 'c'), ('fine', 'x'";
        let parsed = parse_seed(sql, &tag_columns()).expect("has VALUES");
        assert_eq!(parsed.rows.len(), 1);
        let issue = &parsed.issues[0];
        assert_eq!(issue.preview, "('fine', 'x'");
        assert_eq!(
            issue.error,
            RowError::Scan(ScanError::DanglingOpen {
                delimiter: '(',
                pos: 17
            })
        );
    }

    #[test]
    fn previews_are_capped_in_characters() {
        let long_name: String = "x".repeat(300);
        let sql = alloc::format!("VALUES ('{long_name}', 'b')");
        let parsed = parse_seed(&sql, &tag_columns()).expect("has VALUES");
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn an_empty_values_block_has_no_rows() {
        let parsed = parse_seed("VALUES ;", &tag_columns()).expect("has VALUES");
        assert!(parsed.rows.is_empty());
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn scan_errors_format_through_the_row_error() {
        let error = RowError::from(ScanError::UnterminatedString { pos: 7 });
        assert_eq!(
            error.to_string(),
            "Unterminated string literal starting at byte 7"
        );
    }
}

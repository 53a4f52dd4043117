//! Field splitter: split one row into normalized field values.

use alloc::string::String;
use alloc::vec::Vec;

use super::row::ScanError;

/// Split one row (the text between a row's parens) into its field values.
///
/// Commas split fields only at the top level: inside a `'...'` literal and
/// inside `{...}` or `[...]` (JSONB payloads) they are content. The returned
/// values are decoded and normalized:
///
/// - the quotes around string literals are dropped, a doubled `''` becomes
///   one `'`, and a backslash keeps itself plus the character it escapes,
/// - each value is whitespace-trimmed and one trailing lowercase cast such as
///   `::jsonb` is removed,
/// - a bare `NULL` (any case) becomes the empty string, the dataset's CSV
///   convention for missing values.
///
/// A trailing field is kept when it produced any content or consumed a
/// string literal, so `1,''` has two fields while `1,` has one.
///
/// # Errors
///
/// Returns a [`ScanError`] when the row is malformed: an unterminated string
/// literal, an unclosed `{` or `[`, or a stray `}` or `]`.
///
/// # Example
///
/// ```rust
/// use pasar_malam_seed::scan::split_fields;
///
/// let fields = split_fields("'it''s', NULL, '[1, 2]'::jsonb").unwrap();
/// assert_eq!(fields, ["it's", "", "[1, 2]"]);
/// ```
pub fn split_fields(row: &str) -> Result<Vec<String>, ScanError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut depth = 0usize;
    let mut open_delimiter = '{';
    let mut open_pos = 0;
    let mut in_str = false;
    let mut str_start = 0;
    let mut escaped = false;

    let mut chars = row.char_indices().peekable();
    while let Some((at, ch)) = chars.next() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        if in_str {
            match ch {
                '\\' => {
                    current.push(ch);
                    escaped = true;
                }
                '\'' => {
                    // A doubled quote is one literal quote, not the end of
                    // the literal.
                    if chars.peek().is_some_and(|&(_, next)| next == '\'') {
                        current.push('\'');
                        chars.next();
                    } else {
                        in_str = false;
                    }
                }
                _ => current.push(ch),
            }
            continue;
        }
        match ch {
            '\'' => {
                in_str = true;
                quoted = true;
                str_start = at;
            }
            '{' | '[' => {
                if depth == 0 {
                    open_delimiter = ch;
                    open_pos = at;
                }
                depth += 1;
                current.push(ch);
            }
            '}' | ']' => {
                if depth == 0 {
                    return Err(ScanError::UnexpectedClose {
                        delimiter: ch,
                        pos: at,
                    });
                }
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                fields.push(normalize(&current));
                current.clear();
                quoted = false;
            }
            _ => current.push(ch),
        }
    }

    if in_str {
        return Err(ScanError::UnterminatedString { pos: str_start });
    }
    if depth > 0 {
        return Err(ScanError::DanglingOpen {
            delimiter: open_delimiter,
            pos: open_pos,
        });
    }
    if !current.is_empty() || quoted {
        fields.push(normalize(&current));
    }
    Ok(fields)
}

/// Normalize one decoded field: trim, drop one trailing lowercase `::cast`,
/// and map `NULL` to the empty string.
fn normalize(decoded: &str) -> String {
    let mut value = decoded.trim();
    value = strip_cast(value);
    if value.eq_ignore_ascii_case("NULL") {
        return String::new();
    }
    String::from(value)
}

/// Strip one trailing `::cast` where the cast name is a run of lowercase
/// ASCII letters, as the seed writer emits for `::jsonb`.
fn strip_cast(value: &str) -> &str {
    let bytes = value.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_lowercase() {
        start -= 1;
    }
    if start < bytes.len() && start >= 2 && bytes[start - 1] == b':' && bytes[start - 2] == b':' {
        &value[..start - 2]
    } else {
        value
    }
}

//! Row tokenizer: split a `VALUES` body into one string per row.

/// Errors that can occur while scanning rows or fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A string literal was opened but never closed.
    #[error("Unterminated string literal starting at byte {pos}")]
    UnterminatedString {
        /// Byte offset of the opening quote within the scanned text.
        pos: usize,
    },
    /// A group delimiter was opened but never closed.
    #[error("Unclosed '{delimiter}' opened at byte {pos}")]
    DanglingOpen {
        /// The opening delimiter that was never matched.
        delimiter: char,
        /// Byte offset of the unmatched opener within the scanned text.
        pos: usize,
    },
    /// A closing delimiter appeared with no matching opener.
    #[error("Unexpected '{delimiter}' at byte {pos}")]
    UnexpectedClose {
        /// The closing delimiter that had no matching opener.
        delimiter: char,
        /// Byte offset of the stray closer within the scanned text.
        pos: usize,
    },
}

impl ScanError {
    /// Byte offset within the scanned text where the problem was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnterminatedString { pos }
            | Self::DanglingOpen { pos, .. }
            | Self::UnexpectedClose { pos, .. } => *pos,
        }
    }
}

/// Iterator over the rows of a `VALUES` body, created by [`split_rows`].
///
/// Each item is the text between one balanced top-level pair of parens,
/// borrowed from the input. Text between rows (commas, whitespace, stray
/// junk) is skipped, matching how the dataset's seed scripts separate rows
/// with `,\n`.
#[derive(Debug, Clone)]
pub struct Rows<'input> {
    input: &'input str,
    pos: usize,
    done: bool,
}

/// Split the body of a `VALUES` clause into one `&str` per row.
///
/// The scanner honors string literals: quotes, parens and commas inside
/// `'...'` are content, a backslash escapes the next character, and a doubled
/// `''` stays inside the literal (the first quote closes it, the second
/// immediately reopens it, which is exactly how SQL reads it).
///
/// Malformed input ends the iteration with an error: an unterminated string
/// literal, a row opened but never closed, or a `)` with no matching `(`.
/// After an error the iterator is fused.
///
/// # Example
///
/// ```rust
/// use pasar_malam_seed::scan::split_rows;
///
/// let body = "('a, (b)', 1),\n('it''s', 2)";
/// let rows = split_rows(body).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(rows, ["'a, (b)', 1", "'it''s', 2"]);
/// ```
#[must_use]
pub const fn split_rows(body: &str) -> Rows<'_> {
    Rows {
        input: body,
        pos: 0,
        done: false,
    }
}

impl<'input> Iterator for Rows<'input> {
    type Item = Result<&'input str, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bytes = self.input.as_bytes();
        let mut depth = 0usize;
        let mut row_start = 0;
        let mut in_str = false;
        let mut str_start = 0;
        let mut escaped = false;

        while self.pos < bytes.len() {
            let at = self.pos;
            let byte = bytes[at];
            self.pos += 1;

            if escaped {
                escaped = false;
                continue;
            }
            if in_str {
                match byte {
                    b'\\' => escaped = true,
                    b'\'' => in_str = false,
                    _ => {}
                }
                continue;
            }
            match byte {
                b'\'' => {
                    in_str = true;
                    str_start = at;
                }
                b'(' => {
                    if depth == 0 {
                        row_start = at;
                    }
                    depth += 1;
                }
                b')' => {
                    if depth == 0 {
                        self.done = true;
                        return Some(Err(ScanError::UnexpectedClose {
                            delimiter: ')',
                            pos: at,
                        }));
                    }
                    depth -= 1;
                    if depth == 0 {
                        return Some(Ok(&self.input[row_start + 1..at]));
                    }
                }
                _ => {}
            }
        }

        self.done = true;
        if in_str {
            return Some(Err(ScanError::UnterminatedString { pos: str_start }));
        }
        if depth > 0 {
            return Some(Err(ScanError::DanglingOpen {
                delimiter: '(',
                pos: row_start,
            }));
        }
        None
    }
}

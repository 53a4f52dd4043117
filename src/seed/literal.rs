//! SQL literal rendering for seed values.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::fmt::Write;

/// One value in a seed row, rendered through `Display` as a SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedValue {
    /// SQL `NULL`.
    Null,
    /// Boolean flag, rendered `true` or `false`.
    Bool(bool),
    /// Whole number, for counts.
    Integer(i64),
    /// Floating-point number, for measurements. Rendered with a decimal
    /// point so it reads back as a float; non-finite values render `NULL`.
    Real(f64),
    /// Text, rendered as a single-quoted literal with `''` escaping.
    Text(String),
    /// JSON payload, rendered minified inside a quoted literal and cast
    /// with `::jsonb`.
    Jsonb(serde_json::Value),
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write_real(f, *value),
            Self::Text(text) => write_quoted(f, text),
            Self::Jsonb(json) => {
                let rendered = serde_json::to_string(json).map_err(|_| fmt::Error)?;
                write_quoted(f, &rendered)?;
                f.write_str("::jsonb")
            }
        }
    }
}

fn write_real(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_finite() {
        // The dataset has no use for NaN or infinite measurements.
        return f.write_str("NULL");
    }
    let rendered = format!("{value}");
    if rendered.contains('.') || rendered.contains('e') {
        f.write_str(&rendered)
    } else {
        write!(f, "{rendered}.0")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in text.chars() {
        if ch == '\'' {
            f.write_char('\'')?;
        }
        f.write_char(ch)?;
    }
    f.write_char('\'')
}

impl From<bool> for SeedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SeedValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<serde_json::Value> for SeedValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Jsonb(value)
    }
}

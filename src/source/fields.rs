//! Per-field cleanup for the free-text survey columns.

use alloc::string::String;

use crate::market::{Amenities, Parking};

/// Default note for markets whose survey row says nothing about parking.
pub const NO_PARKING_INFO: &str = "No parking information available";

/// Whether a survey cell is effectively empty: blank, `nan`, or `none`.
///
/// The survey passed through spreadsheet tools that render missing cells
/// as the literal text `nan` or `None`.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("none")
}

/// Trim a survey cell, mapping blank markers to the empty string.
#[must_use]
pub fn clean_text(text: &str) -> String {
    if is_blank(text) {
        String::new()
    } else {
        String::from(text.trim())
    }
}

/// Pull the market area out of a free-text field such as `"2,400 m2"` or
/// `"approx 1200.5"`.
///
/// Only the first number in the text counts; thousands separators are
/// removed before parsing. Text without a usable number yields `None`.
#[must_use]
pub fn parse_area_m2(text: &str) -> Option<f64> {
    if is_blank(text) {
        return None;
    }
    first_number(text)?.parse().ok()
}

/// First run of digits and commas with an optional decimal tail, commas
/// stripped.
fn first_number(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let begin = bytes
        .iter()
        .position(|byte| byte.is_ascii_digit() || *byte == b',')?;
    let mut end = begin;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b',') {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    Some(text[begin..end].replace(',', ""))
}

/// Parse a shop count, accepting the `"120.0"` form spreadsheets export.
#[must_use]
pub fn parse_total_shop(text: &str) -> Option<u32> {
    if is_blank(text) {
        return None;
    }
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    digits.parse().ok()
}

/// Read the free-text parking field.
///
/// A blank field means no parking and the [`NO_PARKING_INFO`] note.
/// Otherwise parking counts as available unless the text mentions `no` or
/// `tiada`, accessible when it mentions `accessible` or `handicap`, and
/// the raw text becomes the note. The mention checks are plain substring
/// tests, matching how the survey answers were written.
#[must_use]
pub fn parse_parking(text: &str) -> Parking {
    if is_blank(text) {
        return Parking {
            available: false,
            accessible: false,
            notes: String::from(NO_PARKING_INFO),
        };
    }
    let lower = text.to_lowercase();
    Parking {
        available: !lower.contains("no") && !lower.contains("tiada"),
        accessible: lower.contains("accessible") || lower.contains("handicap"),
        notes: String::from(text),
    }
}

/// Read the free-text amenities field: `toilet` and `prayer`/`surau`
/// mentions set the flags. Blank fields mean no amenities.
#[must_use]
pub fn parse_amenities(text: &str) -> Amenities {
    if is_blank(text) {
        return Amenities::default();
    }
    let lower = text.to_lowercase();
    Amenities {
        toilet: lower.contains("toilet"),
        prayer_room: lower.contains("prayer") || lower.contains("surau"),
    }
}

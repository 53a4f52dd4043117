//! Parsers for the survey's free-text operating-days and hours fields.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::model::{DayNames, TimeSlot, Weekday};

/// Parse a free-text operating-days field into a deduplicated, week-ordered
/// day list.
///
/// The text is lowercased and split on commas, ampersands and the word
/// `"and"`. Each part is first looked up as an exact spelling; failing that,
/// the first table entry whose name or code occurs inside the part wins, so
/// `"every friday"` and `"fri nights"` both hit Friday. Text with no
/// recognizable day (including blanks and `"nan"`) yields an empty list.
#[must_use]
pub fn parse_operating_days(text: &str, names: &DayNames) -> Vec<Weekday> {
    let lower = text.to_lowercase();
    let mut days: Vec<Weekday> = Vec::new();

    for part in split_day_parts(&lower) {
        if let Some(day) = names.get(&part) {
            if !days.contains(&day) {
                days.push(day);
            }
            continue;
        }
        for (name, day) in names.iter() {
            if part.contains(name) || part.contains(day.code()) {
                if !days.contains(&day) {
                    days.push(day);
                }
                break;
            }
        }
    }
    days.sort_unstable();
    days
}

/// Split a lowercased day list on `,`, `&`, and the standalone word `and`,
/// normalizing inner whitespace.
fn split_day_parts(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    for chunk in text.split(|ch| ch == ',' || ch == '&') {
        let mut part = String::new();
        for token in chunk.split_whitespace() {
            if token == "and" {
                flush_part(&mut parts, &mut part);
            } else {
                if !part.is_empty() {
                    part.push(' ');
                }
                part.push_str(token);
            }
        }
        flush_part(&mut parts, &mut part);
    }
    parts
}

fn flush_part(parts: &mut Vec<String>, part: &mut String) {
    if !part.is_empty() {
        parts.push(core::mem::take(part));
    }
}

/// Parse a free-text operating-hours field into time slots.
///
/// The text is split on commas and each part is scanned for the first range
/// shaped like `4-10pm`, `4.30 - 10.30pm` or `11am-2pm`: a clock value with
/// optional dot-separated minutes, an optional meridiem on the start, a
/// hyphen, and a clock value with a required meridiem on the end. A start
/// without its own meridiem is taken as `pm` when the part mentions `pm`
/// and the start hour is below 12, matching how the survey wrote evening
/// ranges. Parts with no parseable range contribute nothing.
#[must_use]
pub fn parse_operating_hours(text: &str) -> Vec<TimeSlot> {
    let lower = text.to_lowercase();
    lower
        .split(',')
        .filter_map(|part| parse_time_range(part.trim()))
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Find the first range-shaped text in one comma-separated part and read it
/// as a time slot. The first structural match decides: if its numbers are
/// not a real clock time the part contributes nothing.
fn parse_time_range(part: &str) -> Option<TimeSlot> {
    let bytes = part.as_bytes();
    let mut from = 0;
    while from < bytes.len() {
        let begin = from + bytes[from..].iter().position(u8::is_ascii_digit)?;
        if let Some(validated) = match_time_range(part, begin) {
            return validated;
        }
        from = begin + 1;
    }
    None
}

/// Try to read `<clock>[am|pm] - <clock>(am|pm)` starting at `begin`.
///
/// The outer `None` means the shape is not there and scanning may continue;
/// `Some(None)` means the shape matched but the numbers are out of range.
fn match_time_range(part: &str, begin: usize) -> Option<Option<TimeSlot>> {
    let bytes = part.as_bytes();
    let (start_hour, start_minute, mut at) = read_clock(bytes, begin)?;
    let start_meridiem = read_meridiem(bytes, at);
    if start_meridiem.is_some() {
        at += 2;
    }
    while at < bytes.len() && bytes[at].is_ascii_whitespace() {
        at += 1;
    }
    if bytes.get(at) != Some(&b'-') {
        return None;
    }
    at += 1;
    while at < bytes.len() && bytes[at].is_ascii_whitespace() {
        at += 1;
    }
    let (end_hour, end_minute, at) = read_clock(bytes, at)?;
    let end_meridiem = read_meridiem(bytes, at)?;

    // Evening ranges were usually written with a single trailing "pm", so a
    // bare start hour below 12 inherits it.
    let start_meridiem = start_meridiem.unwrap_or_else(|| {
        if part.contains("pm") && start_hour < 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    });
    let slot = match (
        to_24h(start_hour, start_minute, start_meridiem),
        to_24h(end_hour, end_minute, end_meridiem),
    ) {
        (Some(start), Some(end)) => Some(TimeSlot {
            start,
            end,
            note: None,
        }),
        _ => None,
    };
    Some(slot)
}

/// Read a clock value such as `4`, `10.30` or `7.3` (tens of minutes).
/// Returns `(hour, minute, next_index)`.
fn read_clock(bytes: &[u8], mut at: usize) -> Option<(u32, u32, usize)> {
    let mut hour: u32 = 0;
    let mut hour_digits = 0;
    while let Some(byte) = bytes.get(at) {
        if !byte.is_ascii_digit() {
            break;
        }
        if hour_digits == 2 {
            // Three or more hour digits is not a clock value.
            return None;
        }
        hour = hour * 10 + u32::from(byte - b'0');
        hour_digits += 1;
        at += 1;
    }
    if hour_digits == 0 {
        return None;
    }

    let mut minute = 0;
    if bytes.get(at) == Some(&b'.') {
        let mut digits = 0;
        let mut value: u32 = 0;
        let mut next = at + 1;
        while let Some(byte) = bytes.get(next) {
            if !byte.is_ascii_digit() {
                break;
            }
            if digits == 2 {
                return None;
            }
            value = value * 10 + u32::from(byte - b'0');
            digits += 1;
            next += 1;
        }
        match digits {
            // A single digit is tens of minutes: `7.3` reads as 7:30.
            1 => minute = value * 10,
            2 => minute = value,
            _ => return None,
        }
        at = next;
    }
    Some((hour, minute, at))
}

fn read_meridiem(bytes: &[u8], at: usize) -> Option<Meridiem> {
    match bytes.get(at..at + 2)? {
        [b'a', b'm'] => Some(Meridiem::Am),
        [b'p', b'm'] => Some(Meridiem::Pm),
        _ => None,
    }
}

/// Render a clock value in 24-hour `HH:MM`, or nothing if it is not a real
/// time of day.
fn to_24h(hour: u32, minute: u32, meridiem: Meridiem) -> Option<String> {
    let hour = match meridiem {
        Meridiem::Pm if hour != 12 => hour + 12,
        Meridiem::Am if hour == 12 => 0,
        _ => hour,
    };
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_day_lists() {
        let names = DayNames::standard();
        assert_eq!(
            parse_operating_days("Monday, Thursday", &names),
            [Weekday::Mon, Weekday::Thu]
        );
    }

    #[test]
    fn parses_malay_day_lists() {
        let names = DayNames::standard();
        assert_eq!(
            parse_operating_days("Isnin & Khamis", &names),
            [Weekday::Mon, Weekday::Thu]
        );
    }

    #[test]
    fn splits_on_the_word_and() {
        let names = DayNames::standard();
        assert_eq!(
            parse_operating_days("saturday and sunday", &names),
            [Weekday::Sat, Weekday::Sun]
        );
    }

    #[test]
    fn substring_fallback_catches_decorated_names() {
        let names = DayNames::standard();
        assert_eq!(parse_operating_days("every friday night", &names), [
            Weekday::Fri
        ]);
        assert_eq!(parse_operating_days("fri nights", &names), [Weekday::Fri]);
    }

    #[test]
    fn substring_fallback_stops_at_the_first_entry() {
        let names = DayNames::standard();
        assert_eq!(
            parse_operating_days("saturday sunday", &names),
            [Weekday::Sat]
        );
    }

    #[test]
    fn codes_match_inside_longer_words() {
        let names = DayNames::standard();
        assert_eq!(parse_operating_days("satay street", &names), [Weekday::Sat]);
        assert_eq!(parse_operating_days("common", &names), [Weekday::Mon]);
    }

    #[test]
    fn days_come_out_deduplicated_in_week_order() {
        let names = DayNames::standard();
        assert_eq!(
            parse_operating_days("sunday, monday, sunday & friday", &names),
            [Weekday::Mon, Weekday::Fri, Weekday::Sun]
        );
    }

    #[test]
    fn unrecognizable_day_text_yields_nothing() {
        let names = DayNames::standard();
        assert!(parse_operating_days("", &names).is_empty());
        assert!(parse_operating_days("nan", &names).is_empty());
        assert!(parse_operating_days("daily-ish", &names).is_empty());
    }

    #[test]
    fn custom_spellings_extend_the_table() {
        let names = DayNames::standard().with_name("weekend start", Weekday::Sat);
        assert_eq!(parse_operating_days("Weekend Start", &names), [
            Weekday::Sat
        ]);
    }

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            start: String::from(start),
            end: String::from(end),
            note: None,
        }
    }

    #[test]
    fn evening_range_inherits_the_trailing_pm() {
        assert_eq!(parse_operating_hours("4-10pm"), [slot("16:00", "22:00")]);
        assert_eq!(parse_operating_hours("5pm - 11pm"), [slot("17:00", "23:00")]);
    }

    #[test]
    fn dotted_minutes_are_clock_minutes() {
        assert_eq!(parse_operating_hours("4.30-10.30pm"), [slot("16:30", "22:30")]);
        assert_eq!(parse_operating_hours("7.3-9.45pm"), [slot("19:30", "21:45")]);
    }

    #[test]
    fn explicit_start_meridiem_is_honored() {
        assert_eq!(parse_operating_hours("11am-2pm"), [slot("11:00", "14:00")]);
    }

    #[test]
    fn morning_range_defaults_to_am() {
        assert_eq!(parse_operating_hours("7-11am"), [slot("07:00", "11:00")]);
    }

    #[test]
    fn noon_and_midnight_follow_twelve_hour_rules() {
        assert_eq!(parse_operating_hours("12am-12pm"), [slot("00:00", "12:00")]);
    }

    #[test]
    fn comma_separated_parts_each_contribute_a_slot() {
        assert_eq!(parse_operating_hours("7-11am, 5-10pm"), [
            slot("07:00", "11:00"),
            slot("17:00", "22:00")
        ]);
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        assert_eq!(parse_operating_hours("open 4-10pm daily"), [slot(
            "16:00", "22:00"
        )]);
    }

    #[test]
    fn ranges_without_an_end_meridiem_are_skipped() {
        assert!(parse_operating_hours("17:00-22:00").is_empty());
        assert!(parse_operating_hours("4-10").is_empty());
    }

    #[test]
    fn nonsense_times_are_skipped() {
        assert!(parse_operating_hours("").is_empty());
        assert!(parse_operating_hours("nan").is_empty());
        assert!(parse_operating_hours("4.99-10pm").is_empty());
        assert!(parse_operating_hours("444-10pm").is_empty());
    }
}

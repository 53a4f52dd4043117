//! Weekdays, time slots, schedule entries, and the day-name table.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

type IndexMap<K, V> = indexmap::IndexMap<K, V, hashbrown::DefaultHashBuilder>;

/// Day of the week, ordered Monday first as schedules are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// All days in week order.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// The three-letter code used in the dataset's JSON and TypeScript.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }
}

impl core::fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// One opening window within a day, in 24-hour `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Opening time, `HH:MM`.
    pub start: String,
    /// Closing time, `HH:MM`.
    pub end: String,
    /// Free-text annotation, such as `"Night market"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One schedule line: a set of days sharing the same time slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Days this entry applies to.
    pub days: Vec<Weekday>,
    /// Opening windows on those days.
    pub times: Vec<TimeSlot>,
}

/// Day-name spellings mapped to weekdays, walked in insertion order.
///
/// The standard table pairs each weekday's Malay name with its English name.
/// Matching is done on lowercased text, first by exact part lookup and then
/// by substring (either the spelled-out name or the three-letter code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNames {
    names: IndexMap<String, Weekday>,
}

impl Default for DayNames {
    fn default() -> Self {
        Self::standard()
    }
}

impl DayNames {
    /// The standard Malay and English day names.
    #[must_use]
    pub fn standard() -> Self {
        let mut names = Self {
            names: IndexMap::default(),
        };
        for (name, day) in [
            ("isnin", Weekday::Mon),
            ("monday", Weekday::Mon),
            ("selasa", Weekday::Tue),
            ("tuesday", Weekday::Tue),
            ("rabu", Weekday::Wed),
            ("wednesday", Weekday::Wed),
            ("khamis", Weekday::Thu),
            ("thursday", Weekday::Thu),
            ("jumaat", Weekday::Fri),
            ("friday", Weekday::Fri),
            ("sabtu", Weekday::Sat),
            ("saturday", Weekday::Sat),
            ("ahad", Weekday::Sun),
            ("sunday", Weekday::Sun),
        ] {
            names = names.with_name(name, day);
        }
        names
    }

    /// Add one spelling, keeping insertion order for substring matching.
    #[must_use]
    pub fn with_name(mut self, name: &str, day: Weekday) -> Self {
        self.names.insert(name.trim().to_lowercase(), day);
        self
    }

    /// Weekday for an exact (case-insensitive) spelling.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Weekday> {
        self.names.get(&name.trim().to_lowercase()).copied()
    }

    /// Spellings in insertion order, for substring matching.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Weekday)> {
        self.names.iter().map(|(name, day)| (name.as_str(), *day))
    }
}

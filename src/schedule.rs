//! Operating schedules: weekdays, time slots, and the survey-field parsers.
//!
//! The survey captured operating days and hours as free text, mixing Malay
//! and English day names ("Isnin & Khamis", "mon, thu and sat") and writing
//! hours in forms like `4.30-10.30pm` or `5pm - 11pm`. The parsers here turn
//! both into structured values.

mod model;
mod parser;

pub use model::{DayNames, ScheduleEntry, TimeSlot, Weekday};
pub use parser::{parse_operating_days, parse_operating_hours};

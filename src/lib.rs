#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod market;
pub mod scan;
pub mod schedule;
pub mod seed;
pub mod slug;
pub mod source;
pub mod states;
pub mod typescript;

// Re-export main types
pub use market::{Amenities, Contact, Location, Market, Parking, RecordError};
pub use scan::{Rows, ScanError, split_fields, split_rows};
pub use schedule::{DayNames, ScheduleEntry, TimeSlot, Weekday};
pub use seed::{
    Columns, ParsedSeed, RowError, RowIssue, SeedError, SeedSchema, SeedValue, parse_seed,
    write_seed,
};
pub use slug::slugify;
pub use source::SourceRecord;
pub use states::StateMap;
pub use typescript::write_markets_module;

//! Raw survey rows and the field cleaners that lift them into records.
//!
//! The dataset began as a community survey where every column is free text.
//! This module holds the row type plus the per-field cleanup used to turn a
//! row into a [`crate::market::Market`].

mod fields;
mod row;

pub use fields::{
    NO_PARKING_INFO, clean_text, is_blank, parse_amenities, parse_area_m2, parse_parking,
    parse_total_shop,
};
pub use row::{SCHEDULE_NOTE, SourceRecord};

//! Conversions between `pasar_malams` seed rows and [`Market`] records.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use serde_json::{Value, json};

use crate::schedule::ScheduleEntry;
use crate::seed::{Columns, SeedValue};

use super::model::{Amenities, Location, Market, Parking, RecordError};

const SEED_WIDTH: usize = Columns::PASAR_MALAM.len();

impl Market {
    /// Build a record from one `pasar_malams` seed row, as produced by
    /// [`crate::seed::parse_seed`] with [`Columns::pasar_malams`].
    ///
    /// Empty fields are the dataset's `NULL`: they become `None`, `false`
    /// or an empty string depending on the column. The row's `created_at`
    /// and `updated_at` are database bookkeeping, not part of the record.
    ///
    /// # Errors
    /// Returns [`RecordError::Width`] when the row is not 19 fields, and an
    /// error naming the column when a boolean, numeric or JSONB field does
    /// not parse.
    pub fn from_seed_row(row: &[String]) -> Result<Self, RecordError> {
        let fields: &[String; SEED_WIDTH] = row.try_into().map_err(|_| RecordError::Width {
            expected: SEED_WIDTH,
            found: row.len(),
        })?;
        let [
            id,
            name,
            address,
            district,
            state,
            status,
            description,
            area_m2,
            total_shop,
            parking_available,
            parking_accessible,
            parking_notes,
            amen_toilet,
            amen_prayer_room,
            location,
            schedule,
            _created_at,
            _updated_at,
            shop_list,
        ] = fields;

        Ok(Self {
            id: id.clone(),
            name: name.clone(),
            address: address.clone(),
            district: district.clone(),
            state: state.clone(),
            schedule: parse_schedule(schedule)?,
            parking: Parking {
                available: parse_flag("parking_available", parking_available)?,
                accessible: parse_flag("parking_accessible", parking_accessible)?,
                notes: parking_notes.clone(),
            },
            amenities: Amenities {
                toilet: parse_flag("amen_toilet", amen_toilet)?,
                prayer_room: parse_flag("amen_prayer_room", amen_prayer_room)?,
            },
            status: status.clone(),
            area_m2: parse_real("area_m2", area_m2)?,
            total_shop: parse_count("total_shop", total_shop)?,
            description: optional_text(description),
            contact: None,
            location: parse_location(location)?,
            shop_list: parse_shop_list(shop_list),
        })
    }

    /// Render the record as one `pasar_malams` seed row.
    ///
    /// `created_at` and `updated_at` are timestamp texts for the row's
    /// bookkeeping columns; the crate does not read clocks. Contact details
    /// have no seed column and are not written.
    #[must_use]
    pub fn to_seed_row(&self, created_at: &str, updated_at: &str) -> Vec<SeedValue> {
        vec![
            SeedValue::from(self.id.as_str()),
            SeedValue::from(self.name.as_str()),
            SeedValue::from(self.address.as_str()),
            SeedValue::from(self.district.as_str()),
            SeedValue::from(self.state.as_str()),
            SeedValue::from(self.status.as_str()),
            optional_value(self.description.as_deref()),
            self.area_m2.map_or(SeedValue::Null, SeedValue::Real),
            self.total_shop
                .map_or(SeedValue::Null, |count| SeedValue::Integer(i64::from(count))),
            SeedValue::Bool(self.parking.available),
            SeedValue::Bool(self.parking.accessible),
            optional_value(non_empty(&self.parking.notes)),
            SeedValue::Bool(self.amenities.toilet),
            SeedValue::Bool(self.amenities.prayer_room),
            SeedValue::Jsonb(location_json(self.location.as_ref())),
            SeedValue::Jsonb(schedule_json(&self.schedule)),
            SeedValue::from(created_at),
            SeedValue::from(updated_at),
            self.shop_list
                .as_ref()
                .map_or(SeedValue::Null, |shops| SeedValue::Text(shops.join(", "))),
        ]
    }
}

fn optional_text(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(String::from(text))
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() { None } else { Some(text) }
}

fn optional_value(text: Option<&str>) -> SeedValue {
    text.map_or(SeedValue::Null, SeedValue::from)
}

fn parse_flag(column: &'static str, text: &str) -> Result<bool, RecordError> {
    if text.is_empty() || text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("f") {
        return Ok(false);
    }
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("t") {
        return Ok(true);
    }
    Err(RecordError::InvalidBool {
        column,
        value: String::from(text),
    })
}

fn parse_real(column: &'static str, text: &str) -> Result<Option<f64>, RecordError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| RecordError::InvalidNumber {
            column,
            value: String::from(text),
        })
}

fn parse_count(column: &'static str, text: &str) -> Result<Option<u32>, RecordError> {
    if text.is_empty() {
        return Ok(None);
    }
    // Counts that passed through spreadsheet tools come back as "120.0".
    let digits = text.strip_suffix(".0").unwrap_or(text);
    digits
        .parse()
        .map(Some)
        .map_err(|_| RecordError::InvalidNumber {
            column,
            value: String::from(text),
        })
}

fn parse_location(text: &str) -> Result<Option<Location>, RecordError> {
    if text.is_empty() || text == "[]" || text == "null" {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|error| RecordError::InvalidJson {
            column: "location",
            message: error.to_string(),
        })
}

fn parse_schedule(text: &str) -> Result<Vec<ScheduleEntry>, RecordError> {
    if text.is_empty() || text == "[]" || text == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(|error| RecordError::InvalidJson {
        column: "schedule",
        message: error.to_string(),
    })
}

fn parse_shop_list(text: &str) -> Option<Vec<String>> {
    if text.is_empty() {
        return None;
    }
    let shops: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|shop| !shop.is_empty())
        .map(String::from)
        .collect();
    if shops.is_empty() { None } else { Some(shops) }
}

fn location_json(location: Option<&Location>) -> Value {
    location.map_or_else(
        || json!([]),
        |location| {
            json!({
                "latitude": location.latitude,
                "longitude": location.longitude,
                "gmaps_link": &location.gmaps_link,
            })
        },
    )
}

fn schedule_json(schedule: &[ScheduleEntry]) -> Value {
    Value::Array(schedule.iter().map(entry_json).collect())
}

fn entry_json(entry: &ScheduleEntry) -> Value {
    json!({
        "days": &entry.days,
        "times": &entry.times,
    })
}

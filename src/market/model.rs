//! The market record as the web application consumes it.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleEntry;

/// Parking situation at a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parking {
    /// Whether visitors can expect to park at all.
    pub available: bool,
    /// Whether accessible (disabled) parking was reported.
    pub accessible: bool,
    /// The survey's own words about parking.
    pub notes: String,
}

/// Amenities reported at a market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    /// A toilet is available.
    pub toilet: bool,
    /// A prayer room (surau) is available.
    pub prayer_room: bool,
}

/// Contact details, when anyone volunteered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Where a market is, with a link for directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Google Maps link, or empty when none was recorded.
    #[serde(default)]
    pub gmaps_link: String,
}

/// One night market.
///
/// Field order follows the application's TypeScript interface, with
/// `shop_list` (carried from its seed column, not declared in the
/// interface) trailing; serde uses the same names, so a serialized market
/// drops straight into the web app's data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Slug id derived from the name, unique within the dataset.
    pub id: String,
    /// Market name as surveyed.
    pub name: String,
    /// Street address.
    pub address: String,
    /// District, extracted from the address when the survey left it blank.
    pub district: String,
    /// Canonical state name.
    pub state: String,
    /// Operating schedule, one entry per day group.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    /// Parking situation.
    pub parking: Parking,
    /// Reported amenities.
    pub amenities: Amenities,
    /// Operating status, `"Active"` unless the survey said otherwise.
    pub status: String,
    /// Market ground area in square meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<f64>,
    /// Number of stalls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_shop: Option<u32>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// Coordinates and maps link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Known stalls, when the survey listed them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_list: Option<Vec<String>>,
}

/// Errors converting a seed row into a [`Market`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The row does not have one field per `pasar_malams` column.
    #[error("Expected {expected} fields, found {found}")]
    Width {
        /// Number of fields a `pasar_malams` row has.
        expected: usize,
        /// Number of fields this row has.
        found: usize,
    },
    /// A boolean column held something other than true/false.
    #[error("Column {column}: '{value}' is not a boolean")]
    InvalidBool {
        /// Column the value came from.
        column: &'static str,
        /// The offending text.
        value: String,
    },
    /// A numeric column held something unparseable.
    #[error("Column {column}: '{value}' is not a number")]
    InvalidNumber {
        /// Column the value came from.
        column: &'static str,
        /// The offending text.
        value: String,
    },
    /// A JSONB column held something that does not parse as its payload.
    #[error("Column {column}: {message}")]
    InvalidJson {
        /// Column the value came from.
        column: &'static str,
        /// What serde said about it.
        message: String,
    },
}

//! Raw survey rows and their lift into typed market records.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::market::{Location, Market};
use crate::schedule::{DayNames, ScheduleEntry, parse_operating_days, parse_operating_hours};
use crate::slug::slugify;
use crate::states::{StateMap, extract_state_and_district};

use super::fields::{
    clean_text, is_blank, parse_amenities, parse_area_m2, parse_parking, parse_total_shop,
};

/// Annotation attached to every survey-derived time slot.
pub const SCHEDULE_NOTE: &str = "Night market";

/// One row of the night-market survey, exactly as captured: every column
/// is free text and may be blank, `nan`, or creatively formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    /// Market name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// District, often blank.
    pub district: String,
    /// State, in any of its common spellings.
    pub state: String,
    /// Free-text operating days, such as `"Isnin & Khamis"`.
    pub operating_day: String,
    /// Free-text operating hours, such as `"4.30-10.30pm"`.
    pub operating_hour: String,
    /// Latitude; some rows hold both coordinates here as `"lat, lng"`.
    pub latitude: String,
    /// Longitude, blank when combined into `latitude`.
    pub longitude: String,
    /// Google Maps link.
    pub gmaps_link: String,
    /// Free-text amenities list.
    pub amenities: String,
    /// Free-text parking description.
    pub parking: String,
    /// Free-text market area, such as `"2,400 m2"`.
    pub area_m2: String,
    /// Shop count, sometimes exported as `"120.0"`.
    pub total_shop: String,
    /// Status; blank rows default to `"Active"`.
    pub status: String,
}

impl SourceRecord {
    /// Clean this survey row into a typed record.
    ///
    /// Text columns are trimmed with blank markers dropped. The id is the
    /// slug of the cleaned name. The state is canonicalized through
    /// `states`; when state or district is blank they are recovered from
    /// the address. Recognized operating days and hours combine into one
    /// schedule entry per day, each slot annotated with [`SCHEDULE_NOTE`];
    /// if either side is unrecognizable the schedule is empty. Coordinates
    /// must both parse for a location to appear.
    #[must_use]
    pub fn to_market(&self, names: &DayNames, states: &StateMap) -> Market {
        let name = clean_text(&self.name);
        let address = clean_text(&self.address);

        let mut district = clean_text(&self.district);
        let mut state = clean_text(&self.state);
        if let Some(canonical) = states.canonical(&state) {
            state = String::from(canonical);
        }
        if state.is_empty() || district.is_empty() {
            let (address_state, address_district) = extract_state_and_district(&address, states);
            if state.is_empty() {
                state = address_state;
            }
            if district.is_empty() {
                district = address_district;
            }
        }

        let days = parse_operating_days(&self.operating_day, names);
        let mut times = parse_operating_hours(&self.operating_hour);
        for slot in &mut times {
            slot.note = Some(String::from(SCHEDULE_NOTE));
        }
        let schedule = if days.is_empty() || times.is_empty() {
            Vec::new()
        } else {
            days.into_iter()
                .map(|day| ScheduleEntry {
                    days: vec![day],
                    times: times.clone(),
                })
                .collect()
        };

        let location = match self.coordinates() {
            (Some(latitude), Some(longitude)) => Some(Location {
                latitude,
                longitude,
                gmaps_link: clean_text(&self.gmaps_link),
            }),
            _ => None,
        };

        let status = clean_text(&self.status);

        Market {
            id: slugify(&name),
            name,
            address,
            district,
            state,
            schedule,
            parking: parse_parking(&self.parking),
            amenities: parse_amenities(&self.amenities),
            status: if status.is_empty() {
                String::from("Active")
            } else {
                status
            },
            area_m2: parse_area_m2(&self.area_m2),
            total_shop: parse_total_shop(&self.total_shop),
            description: None,
            contact: None,
            location,
            shop_list: None,
        }
    }

    /// Latitude and longitude, splitting rows where both coordinates were
    /// typed into the latitude column.
    fn coordinates(&self) -> (Option<f64>, Option<f64>) {
        if let Some((latitude, longitude)) = self.latitude.split_once(',') {
            return (parse_coordinate(latitude), parse_coordinate(longitude));
        }
        (
            parse_coordinate(&self.latitude),
            parse_coordinate(&self.longitude),
        )
    }
}

fn parse_coordinate(text: &str) -> Option<f64> {
    if is_blank(text) {
        return None;
    }
    text.trim().parse().ok()
}

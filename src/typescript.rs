//! Generation of the web app's `markets-data.ts` module.
//!
//! The output carries its own type declarations, the `marketsData` array in
//! interface field order, and the two lookup helpers the app imports. The
//! layout is stable so regenerated files diff cleanly.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::market::{Contact, Location, Market};
use crate::schedule::{ScheduleEntry, TimeSlot};

const TS_HEADER: &str = r"export type Weekday = 'mon' | 'tue' | 'wed' | 'thu' | 'fri' | 'sat' | 'sun'

export interface MarketSchedule {
  days: Weekday[]
  times: {
    start: string
    end: string
    note?: string
  }[]
}

export interface Market {
  id: string
  name: string
  address: string
  district: string
  state: string
  schedule: MarketSchedule[]
  parking: {
    available: boolean
    accessible: boolean
    notes: string
  }
  amenities: {
    toilet: boolean
    prayer_room: boolean
  }
  status: string
  area_m2: number | null
  total_shop: number | null
  description?: string
  contact?: {
    phone?: string
    email?: string
  }
  location?: {
    latitude: number
    longitude: number
    gmaps_link: string
  }
}

export const marketsData: Market[] = [
";

const TS_FOOTER: &str = r"]

export function getMarketById(id: string): Market | undefined {
  return marketsData.find((market) => market.id === id)
}

export function getAllMarkets(): Market[] {
  return marketsData
}
";

/// Render the records as the complete TypeScript module.
///
/// Optional parts (description, contact, location) appear only when
/// present, in interface field order. Text is escaped for double-quoted
/// JS string literals, and numbers render the way the app's data file
/// writes them: floats always carry a decimal point, missing numerics
/// become `null`.
#[must_use]
pub fn write_markets_module(markets: &[Market]) -> String {
    let mut out = String::from(TS_HEADER);
    for (index, market) in markets.iter().enumerate() {
        write_market(&mut out, market);
        if index + 1 < markets.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(TS_FOOTER);
    out
}

fn write_market(out: &mut String, market: &Market) {
    out.push_str("  {\n");
    writeln!(out, "    id: {},", ts_string(&market.id)).unwrap();
    writeln!(out, "    name: {},", ts_string(&market.name)).unwrap();
    writeln!(out, "    address: {},", ts_string(&market.address)).unwrap();
    writeln!(out, "    district: {},", ts_string(&market.district)).unwrap();
    writeln!(out, "    state: {},", ts_string(&market.state)).unwrap();

    out.push_str("    schedule: [\n");
    for entry in &market.schedule {
        write_entry(out, entry);
    }
    out.push_str("    ],\n");

    out.push_str("    parking: {\n");
    writeln!(out, "      available: {},", market.parking.available).unwrap();
    writeln!(out, "      accessible: {},", market.parking.accessible).unwrap();
    writeln!(out, "      notes: {},", ts_string(&market.parking.notes)).unwrap();
    out.push_str("    },\n");

    out.push_str("    amenities: {\n");
    writeln!(out, "      toilet: {},", market.amenities.toilet).unwrap();
    writeln!(out, "      prayer_room: {},", market.amenities.prayer_room).unwrap();
    out.push_str("    },\n");

    writeln!(out, "    status: {},", ts_string(&market.status)).unwrap();
    writeln!(out, "    area_m2: {},", ts_real(market.area_m2)).unwrap();
    writeln!(out, "    total_shop: {},", ts_count(market.total_shop)).unwrap();

    if let Some(description) = &market.description {
        writeln!(out, "    description: {},", ts_string(description)).unwrap();
    }
    if let Some(contact) = &market.contact {
        write_contact(out, contact);
    }
    if let Some(location) = &market.location {
        write_location(out, location);
    }
    out.push_str("  }");
}

fn write_entry(out: &mut String, entry: &ScheduleEntry) {
    out.push_str("      {\n");
    out.push_str("        days: [");
    for (index, day) in entry.days.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write!(out, "\"{day}\"").unwrap();
    }
    out.push_str("],\n");
    out.push_str("        times: [\n");
    for slot in &entry.times {
        write_slot(out, slot);
    }
    out.push_str("        ],\n");
    out.push_str("      },\n");
}

fn write_slot(out: &mut String, slot: &TimeSlot) {
    out.push_str("          {\n");
    writeln!(out, "            start: {},", ts_string(&slot.start)).unwrap();
    writeln!(out, "            end: {},", ts_string(&slot.end)).unwrap();
    if let Some(note) = &slot.note {
        writeln!(out, "            note: {},", ts_string(note)).unwrap();
    }
    out.push_str("          },\n");
}

fn write_contact(out: &mut String, contact: &Contact) {
    out.push_str("    contact: {\n");
    if let Some(phone) = &contact.phone {
        writeln!(out, "      phone: {},", ts_string(phone)).unwrap();
    }
    if let Some(email) = &contact.email {
        writeln!(out, "      email: {},", ts_string(email)).unwrap();
    }
    out.push_str("    },\n");
}

fn write_location(out: &mut String, location: &Location) {
    out.push_str("    location: {\n");
    writeln!(out, "      latitude: {},", ts_float(location.latitude)).unwrap();
    writeln!(out, "      longitude: {},", ts_float(location.longitude)).unwrap();
    writeln!(out, "      gmaps_link: {},", ts_string(&location.gmaps_link)).unwrap();
    out.push_str("    },\n");
}

/// Quote text as a double-quoted JS string literal.
fn ts_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

fn ts_float(value: f64) -> String {
    if !value.is_finite() {
        return String::from("null");
    }
    let mut rendered = format!("{value}");
    if !rendered.contains('.') && !rendered.contains('e') {
        rendered.push_str(".0");
    }
    rendered
}

fn ts_real(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("null"), ts_float)
}

fn ts_count(value: Option<u32>) -> String {
    value.map_or_else(|| String::from("null"), |count| format!("{count}"))
}

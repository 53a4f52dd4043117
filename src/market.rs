//! The typed market record and its seed-row conversions.

mod convert;
mod model;

pub use model::{Amenities, Contact, Location, Market, Parking, RecordError};

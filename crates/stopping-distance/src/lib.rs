//! Stopping-Distance Reference Table
//!
//! Fixed mapping from (speed bracket, road condition) to stopping distance,
//! with nearest-bracket resolution for arbitrary observed speeds:
//! - 8 reference brackets covering 40-110 km/h
//! - Dry/Wet columns selected by a visibility-derived road condition
//! - Ascending nearest-key search, lower bracket wins exact ties

mod condition;
mod error;
mod table;

pub use condition::RoadCondition;
pub use error::TableError;
pub use table::{StoppingDistanceEntry, StoppingDistanceTable, BRACKET_COUNT};

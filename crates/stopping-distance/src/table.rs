//! Stopping-Distance Table and Nearest-Bracket Search

use crate::{RoadCondition, TableError};
use serde::{Deserialize, Serialize};

/// Number of speed brackets in the table
pub const BRACKET_COUNT: usize = 8;

/// One row of the stopping-distance table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoppingDistanceEntry {
    /// Reference speed (km/h)
    pub speed_bracket_kmh: u16,
    /// Stopping distance on a dry surface (m)
    pub dry_distance_m: f64,
    /// Stopping distance on a wet surface (m)
    pub wet_distance_m: f64,
}

/// Reference distances per bracket; the wet column is dry x 1.5
const REFERENCE_ENTRIES: [StoppingDistanceEntry; BRACKET_COUNT] = [
    StoppingDistanceEntry { speed_bracket_kmh: 40, dry_distance_m: 32.0, wet_distance_m: 48.0 },
    StoppingDistanceEntry { speed_bracket_kmh: 50, dry_distance_m: 38.0, wet_distance_m: 57.0 },
    StoppingDistanceEntry { speed_bracket_kmh: 60, dry_distance_m: 45.0, wet_distance_m: 67.5 },
    StoppingDistanceEntry { speed_bracket_kmh: 70, dry_distance_m: 52.0, wet_distance_m: 78.0 },
    StoppingDistanceEntry { speed_bracket_kmh: 80, dry_distance_m: 58.0, wet_distance_m: 87.0 },
    StoppingDistanceEntry { speed_bracket_kmh: 90, dry_distance_m: 64.0, wet_distance_m: 96.0 },
    StoppingDistanceEntry { speed_bracket_kmh: 100, dry_distance_m: 70.0, wet_distance_m: 105.0 },
    StoppingDistanceEntry { speed_bracket_kmh: 110, dry_distance_m: 77.0, wet_distance_m: 115.5 },
];

/// Immutable stopping-distance lookup table
///
/// Holds exactly [`BRACKET_COUNT`] rows with strictly increasing speed
/// brackets. There is no mutation API; a table is fixed for the life of
/// the process.
#[derive(Debug, Clone, PartialEq)]
pub struct StoppingDistanceTable {
    entries: [StoppingDistanceEntry; BRACKET_COUNT],
}

impl StoppingDistanceTable {
    /// The built-in reference table (40-110 km/h)
    pub fn reference() -> Self {
        Self {
            entries: REFERENCE_ENTRIES,
        }
    }

    /// Build a table from custom rows, validating the bracket order and
    /// the dry/wet relationship
    pub fn new(entries: [StoppingDistanceEntry; BRACKET_COUNT]) -> Result<Self, TableError> {
        for pair in entries.windows(2) {
            if pair[1].speed_bracket_kmh <= pair[0].speed_bracket_kmh {
                return Err(TableError::UnorderedBrackets);
            }
        }
        for entry in &entries {
            if !entry.dry_distance_m.is_finite()
                || !entry.wet_distance_m.is_finite()
                || entry.dry_distance_m <= 0.0
            {
                return Err(TableError::InvalidDistance {
                    bracket_kmh: entry.speed_bracket_kmh,
                });
            }
            if entry.wet_distance_m <= entry.dry_distance_m {
                return Err(TableError::WetNotLonger {
                    bracket_kmh: entry.speed_bracket_kmh,
                    dry_m: entry.dry_distance_m,
                    wet_m: entry.wet_distance_m,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Exact-key lookup of the stopping distance for a bracket
    pub fn lookup(&self, bracket_kmh: u16, condition: RoadCondition) -> Result<f64, TableError> {
        self.entries
            .iter()
            .find(|entry| entry.speed_bracket_kmh == bracket_kmh)
            .map(|entry| match condition {
                RoadCondition::Dry => entry.dry_distance_m,
                RoadCondition::Wet => entry.wet_distance_m,
            })
            .ok_or(TableError::BracketNotFound(bracket_kmh))
    }

    /// Resolve the bracket closest to an observed speed.
    ///
    /// Scans the ascending bracket keys and keeps the first minimal
    /// absolute difference, so an exact tie resolves to the lower bracket.
    /// Total for any non-negative speed: values below 40 clamp to 40 and
    /// values above 110 clamp to 110.
    pub fn closest_bracket(&self, observed_speed_kmh: f64) -> u16 {
        let mut best = self.entries[0].speed_bracket_kmh;
        let mut best_delta = (observed_speed_kmh - f64::from(best)).abs();
        for entry in &self.entries[1..] {
            let delta = (observed_speed_kmh - f64::from(entry.speed_bracket_kmh)).abs();
            if delta < best_delta {
                best = entry.speed_bracket_kmh;
                best_delta = delta;
            }
        }
        best
    }

    /// Table rows, ascending by bracket
    pub fn entries(&self) -> &[StoppingDistanceEntry] {
        &self.entries
    }
}

impl Default for StoppingDistanceTable {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lookup_reference_cells() {
        let table = StoppingDistanceTable::reference();
        assert_eq!(table.lookup(60, RoadCondition::Dry).unwrap(), 45.0);
        assert_eq!(table.lookup(100, RoadCondition::Wet).unwrap(), 105.0);
        assert_eq!(table.lookup(40, RoadCondition::Dry).unwrap(), 32.0);
        assert_eq!(table.lookup(110, RoadCondition::Wet).unwrap(), 115.5);
    }

    #[test]
    fn test_lookup_unknown_bracket() {
        let table = StoppingDistanceTable::reference();
        assert!(matches!(
            table.lookup(65, RoadCondition::Dry),
            Err(TableError::BracketNotFound(65))
        ));
    }

    #[test]
    fn test_closest_bracket_neighborhood() {
        let table = StoppingDistanceTable::reference();
        for speed in 35..=44 {
            assert_eq!(table.closest_bracket(f64::from(speed)), 40, "speed {speed}");
        }
    }

    #[test]
    fn test_closest_bracket_tie_prefers_lower() {
        let table = StoppingDistanceTable::reference();
        assert_eq!(table.closest_bracket(45.0), 40);
        assert_eq!(table.closest_bracket(105.0), 100);
    }

    #[test]
    fn test_closest_bracket_clamps_to_endpoints() {
        let table = StoppingDistanceTable::reference();
        assert_eq!(table.closest_bracket(0.0), 40);
        assert_eq!(table.closest_bracket(12.5), 40);
        assert_eq!(table.closest_bracket(400.0), 110);
    }

    #[test]
    fn test_reference_table_invariants() {
        let table = StoppingDistanceTable::reference();
        let entries = table.entries();
        assert_eq!(entries.len(), BRACKET_COUNT);
        for pair in entries.windows(2) {
            assert!(pair[0].speed_bracket_kmh < pair[1].speed_bracket_kmh);
            assert!(pair[0].dry_distance_m < pair[1].dry_distance_m);
            assert!(pair[0].wet_distance_m < pair[1].wet_distance_m);
        }
        for entry in entries {
            assert!(entry.wet_distance_m > entry.dry_distance_m);
        }
    }

    #[test]
    fn test_custom_table_rejects_unordered_brackets() {
        let mut entries = StoppingDistanceTable::reference().entries;
        entries.swap(0, 1);
        assert!(matches!(
            StoppingDistanceTable::new(entries),
            Err(TableError::UnorderedBrackets)
        ));
    }

    #[test]
    fn test_custom_table_rejects_wet_not_longer() {
        let mut entries = StoppingDistanceTable::reference().entries;
        entries[3].wet_distance_m = entries[3].dry_distance_m;
        assert!(matches!(
            StoppingDistanceTable::new(entries),
            Err(TableError::WetNotLonger { bracket_kmh: 70, .. })
        ));
    }

    proptest! {
        #[test]
        fn closest_bracket_always_in_key_set(speed in 0.0f64..500.0) {
            let table = StoppingDistanceTable::reference();
            let bracket = table.closest_bracket(speed);
            prop_assert!(table
                .entries()
                .iter()
                .any(|entry| entry.speed_bracket_kmh == bracket));
        }

        #[test]
        fn lookup_succeeds_for_resolved_bracket(speed in 0.0f64..500.0) {
            let table = StoppingDistanceTable::reference();
            let bracket = table.closest_bracket(speed);
            prop_assert!(table.lookup(bracket, RoadCondition::Wet).is_ok());
        }
    }
}

//! Table Error Types

use thiserror::Error;

/// Errors from table construction and lookup
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// Bracket key outside the fixed set
    #[error("no stopping-distance entry for speed bracket {0} km/h")]
    BracketNotFound(u16),

    /// Custom table rows not in strictly increasing bracket order
    #[error("speed brackets must be strictly increasing")]
    UnorderedBrackets,

    /// A wet distance that does not exceed its dry counterpart
    #[error("wet distance {wet_m} m must exceed dry distance {dry_m} m at bracket {bracket_kmh} km/h")]
    WetNotLonger {
        bracket_kmh: u16,
        dry_m: f64,
        wet_m: f64,
    },

    /// A distance that is not a positive finite number
    #[error("distance for bracket {bracket_kmh} km/h must be positive and finite")]
    InvalidDistance { bracket_kmh: u16 },
}

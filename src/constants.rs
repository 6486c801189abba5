//! Application constants for the bike-share network
//!
//! This module contains the station file layout, normalizer tokens,
//! compass sector boundaries and default values used throughout the crate.

// =============================================================================
// Station File Layout
// =============================================================================

/// Number of fields in one station row
pub const STATION_FIELD_COUNT: usize = 9;

/// Position of the name column in a station row
pub const NAME_INDEX: usize = 1;

/// Column names of a station row, in file order
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const CAPACITY: &str = "capacity";
    pub const BIKES_AVAILABLE: &str = "bikes_available";
    pub const DOCKS_AVAILABLE: &str = "docks_available";
    pub const IS_RENTING: &str = "is_renting";
    pub const IS_RETURNING: &str = "is_returning";

    /// All station columns in the order they appear in a station row
    pub const ALL: &[&str] = &[
        ID,
        NAME,
        LATITUDE,
        LONGITUDE,
        CAPACITY,
        BIKES_AVAILABLE,
        DOCKS_AVAILABLE,
        IS_RENTING,
        IS_RETURNING,
    ];
}

// =============================================================================
// Record Normalizer Tokens
// =============================================================================

/// Literal that normalizes to `true`
pub const TRUE_TOKEN: &str = "True";

/// Literal that normalizes to `false`
pub const FALSE_TOKEN: &str = "False";

/// Literal that normalizes to an absent value (the empty string does too)
pub const NULL_TOKEN: &str = "null";

// =============================================================================
// Direction Defaults
// =============================================================================

/// Nudge applied to the start longitude when both stations share a longitude
pub const DEFAULT_LONGITUDE_EPSILON: f64 = 0.00001;

/// Compass sector boundaries in degrees
pub mod sectors {
    pub const WEST_BOUND: f64 = 22.5;
    pub const SOUTHWEST_BOUND: f64 = 67.5;
    pub const SOUTH_BOUND: f64 = 112.5;
    pub const SOUTHEAST_BOUND: f64 = 157.5;
}

// =============================================================================
// Loader Defaults
// =============================================================================

/// Default field delimiter for station files
pub const DEFAULT_DELIMITER: u8 = b',';

/// Station files carry a header row by default
pub const DEFAULT_HAS_HEADER: bool = true;

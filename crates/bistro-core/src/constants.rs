//! Global constants used throughout the Bistro codebase
//!
//! Compile-time defaults shared by the containers, the configuration layer
//! and the seeding code.

/// Default number of hash table buckets
///
/// A small prime keeps the positional hash spread reasonable for short
/// identifier-like keys. The table never resizes.
pub const DEFAULT_BUCKET_COUNT: usize = 31;

/// Default distance below which two tables get a direct walking edge
pub const DEFAULT_TABLE_LINK_THRESHOLD: f64 = 50.0;

/// Location id of the kitchen on the floor plan
pub const KITCHEN_ID: &str = "kitchen";

/// Location id of the bar on the floor plan
pub const BAR_ID: &str = "bar";

/// Location id of the entrance on the floor plan
pub const ENTRANCE_ID: &str = "entrance";

/// Location id of the first restroom (connected to entrance and bar)
pub const RESTROOM_1_ID: &str = "restroom1";

/// Location id of the second restroom (connected to entrance, kitchen and bar)
pub const RESTROOM_2_ID: &str = "restroom2";

/// Prefix used to derive a table's location id from its number
pub const TABLE_LOCATION_PREFIX: &str = "table-";

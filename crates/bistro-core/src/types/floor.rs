//! Floor plan: tables and walkable locations

use serde::{Deserialize, Serialize};

use crate::constants::TABLE_LOCATION_PREFIX;

/// Occupancy state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    /// Free to seat
    Available,
    /// Guests seated with an open order
    Occupied,
    /// Held for a booking
    Reserved,
    /// Needs clearing
    Dirty,
}

/// A table on the floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantTable {
    /// Table number
    pub id: u32,
    /// Floor x coordinate
    pub x: f64,
    /// Floor y coordinate
    pub y: f64,
    /// Seats
    pub seats: u32,
    /// Occupancy
    pub status: TableStatus,
    /// Open order, if any
    pub current_order_id: Option<String>,
}

impl RestaurantTable {
    /// New available table
    pub fn new(id: u32, x: f64, y: f64, seats: u32) -> Self {
        Self { id, x, y, seats, status: TableStatus::Available, current_order_id: None }
    }

    /// Graph vertex id for this table, e.g. `table-3`
    pub fn location_id(&self) -> String {
        format!("{}{}", TABLE_LOCATION_PREFIX, self.id)
    }

    /// Walkable location for this table
    pub fn to_location(&self) -> Location {
        Location {
            id: self.location_id(),
            name: format!("Table {}", self.id),
            kind: LocationKind::Table,
            x: self.x,
            y: self.y,
        }
    }
}

/// What a location is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationKind {
    /// A dining table
    Table,
    /// The kitchen pass
    Kitchen,
    /// The bar
    Bar,
    /// Front door
    Entrance,
    /// Restroom
    Restroom,
}

/// A named point on the floor; one graph vertex each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Vertex id
    pub id: String,
    /// Display name
    pub name: String,
    /// Kind of place
    pub kind: LocationKind,
    /// Floor x coordinate
    pub x: f64,
    /// Floor y coordinate
    pub y: f64,
}

impl Location {
    /// New location
    pub fn new(id: &str, name: &str, kind: LocationKind, x: f64, y: f64) -> Self {
        Self { id: id.to_string(), name: name.to_string(), kind, x, y }
    }

    /// Straight-line distance to another location
    pub fn distance_to(&self, other: &Location) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

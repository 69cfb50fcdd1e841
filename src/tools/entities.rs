/// A route as published, keyed by its numeric id. Several raw routes may
/// collapse into one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: i64,
    pub short_name: Option<String>,
    pub long_name: String,
    /// Hex color without the leading `#`.
    pub color: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stop {
    pub id: i32,
    /// Code shown to riders, empty when the feed has none.
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Travel direction of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    /// The feed's `direction_id`, 0 when absent.
    Id(u8),
}

impl Default for Direction {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl Direction {
    pub fn from_flag(direction_id: Option<u8>) -> Self {
        Self::Id(direction_id.unwrap_or_default())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headsign {
    pub value: String,
    pub direction: Direction,
}

impl Headsign {
    pub fn new(value: impl Into<String>, direction: Direction) -> Self {
        Self {
            value: value.into(),
            direction,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub route_id: i64,
    pub service_id: u32,
    pub headsign: Headsign,
}

use thiserror::Error;

mod config;
mod data;
pub mod models;
pub use config::*;
pub use data::*;
pub use models::*;

/// Raised when a feed record falls outside the closed set of patterns the
/// agency is known to produce. None of these are recoverable: the run stops
/// rather than emit a silently wrong identifier.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unexpected route ID for {0}!")]
    UnexpectedRouteId(String),
    #[error("Unexpected route short name for {0}!")]
    UnexpectedRouteShortName(String),
    #[error("Unexpected stop ID for {0}!")]
    UnexpectedStopId(String),
    #[error("Stop doesn't have an ID (end with) {0}!")]
    StopWithoutDirection(String),
    #[error("Stop ID out of range for {0}!")]
    StopIdOverflow(String),
    #[error("Unexpected headsign merge of {trip} with {other}!")]
    UnexpectedHeadsignMerge { trip: String, other: String },
    #[error("Could not merge long name of route {route_id}: '{long_name}' and '{other_long_name}'")]
    RouteMergeFailed {
        route_id: i64,
        long_name: String,
        other_long_name: String,
    },
    #[error("Stop ID {stop_id} derived for both '{first}' and '{second}'")]
    DuplicateStopId {
        stop_id: i32,
        first: String,
        second: String,
    },
    #[error("Trip {trip_id} references unknown route {route_id}")]
    UnknownRoute { trip_id: String, route_id: String },
    #[error("Unknown service ID {0}")]
    UnknownService(String),
}

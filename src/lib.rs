//! GTFS customizations for L'Inter, the regional bus network of the
//! Laurentides (TaCL).
//!
//! [`tools::AgencyTools`] describes the hooks a feed pipeline calls while it
//! processes routes, stops and trips, [`agency::InterAgency`] implements them
//! for this network and [`pipeline::Pipeline`] runs them over an in-memory feed.

pub mod agency;
pub mod gtfs;
pub mod pipeline;
pub mod shared;
pub mod tools;

pub mod prelude {
    pub use crate::agency::InterAgency;
    pub use crate::gtfs::{Config, GtfsData};
    pub use crate::pipeline::{Output, Pipeline};
    pub use crate::tools::{AgencyTools, Direction, Headsign, Route, RunContext, Stop, Trip};
}

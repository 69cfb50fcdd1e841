mod context;
pub mod defaults;
mod entities;
mod services;

pub use context::*;
pub use entities::*;
pub use services::*;

use crate::{
    gtfs::{self, Config, GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsStop, GtfsTrip},
    shared::clean,
};

/// Hook points the pipeline calls while turning a raw feed into routes,
/// stops and trips. Every method has a generic default; an agency only
/// overrides what its feed needs.
pub trait AgencyTools {
    fn config(&self) -> &Config;

    fn agency_name(&self) -> &str {
        &self.config().agency_name
    }

    fn agency_color(&self) -> &str {
        &self.config().agency_color
    }

    fn agency_route_type(&self) -> i32 {
        self.config().route_type
    }

    /// Whether services that no longer run are pruned from the feed.
    fn default_exclude_enabled(&self) -> bool {
        self.config().exclude_enabled
    }

    fn direction_splitter_enabled(&self) -> bool {
        self.config().direction_splitter_enabled
    }

    fn direction_finder_enabled(&self) -> bool {
        self.config().direction_finder_enabled
    }

    fn exclude_calendar(&self, ctx: &RunContext, calendar: &GtfsCalendar) -> bool {
        ctx.excludes_service(&calendar.service_id)
    }

    fn exclude_calendar_date(&self, ctx: &RunContext, calendar_date: &GtfsCalendarDate) -> bool {
        ctx.excludes_service(&calendar_date.service_id)
    }

    fn exclude_trip(&self, ctx: &RunContext, trip: &GtfsTrip) -> bool {
        ctx.excludes_service(&trip.service_id)
    }

    /// True when nothing of the agency survives filtering.
    fn excluding_all(&self, ctx: &RunContext) -> bool {
        ctx.excluding_all()
    }

    fn route_id(&self, route: &GtfsRoute) -> Result<i64, gtfs::Error> {
        defaults::route_id(route)
    }

    fn route_short_name(&self, route: &GtfsRoute) -> Result<Option<String>, gtfs::Error> {
        Ok(defaults::route_short_name(route))
    }

    fn route_long_name(&self, route: &GtfsRoute) -> String {
        defaults::route_long_name(route)
    }

    /// Called when two raw routes map to the same id. `Ok(false)` means the
    /// long names could not be reconciled.
    fn merge_route_long_name(&self, route: &mut Route, other: &Route) -> Result<bool, gtfs::Error> {
        Ok(defaults::merge_route_long_name(route, other))
    }

    fn stop_code(&self, stop: &GtfsStop) -> String {
        defaults::stop_code(stop)
    }

    fn stop_id(&self, stop: &GtfsStop) -> Result<i32, gtfs::Error> {
        defaults::stop_id(stop)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean::clean_label(name)
    }

    fn trip_headsign(&self, _route: &Route, trip: &GtfsTrip) -> Result<Headsign, gtfs::Error> {
        Ok(Headsign::new(
            self.clean_trip_headsign(defaults::trip_headsign(trip)),
            Direction::from_flag(trip.direction_id),
        ))
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean::clean_label(headsign)
    }

    /// Called when two trips of one route and direction disagree on their
    /// headsign. `Ok(false)` keeps them apart.
    fn merge_headsign(&self, trip: &mut Trip, other: &Trip) -> Result<bool, gtfs::Error> {
        Ok(defaults::merge_headsign(trip, other))
    }
}

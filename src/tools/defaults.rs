//! Generic behaviour behind the [`AgencyTools`](super::AgencyTools) hooks.
//! Agencies that override a hook can still fall back on these.

use crate::{
    gtfs::{self, GtfsRoute, GtfsStop, GtfsTrip},
    shared::clean,
    tools::{Route, Trip},
};

/// True for a non-empty string of ASCII digits.
pub fn is_digits_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn route_id(route: &GtfsRoute) -> Result<i64, gtfs::Error> {
    if !is_digits_only(&route.route_id) {
        return Err(gtfs::Error::UnexpectedRouteId(format!("{route:?}")));
    }
    route
        .route_id
        .parse()
        .map_err(|_| gtfs::Error::UnexpectedRouteId(format!("{route:?}")))
}

pub fn route_short_name(route: &GtfsRoute) -> Option<String> {
    route
        .route_short_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
}

pub fn route_long_name(route: &GtfsRoute) -> String {
    clean::clean_label(route.route_long_name.as_deref().unwrap_or_default())
}

/// Keeps `route`'s long name when both agree or `other` has none, takes
/// `other`'s when `route` has none. Returns false on a real conflict.
pub fn merge_route_long_name(route: &mut Route, other: &Route) -> bool {
    if other.long_name.is_empty() || route.long_name == other.long_name {
        return true;
    }
    if route.long_name.is_empty() {
        route.long_name = other.long_name.clone();
        return true;
    }
    false
}

pub fn stop_code(stop: &GtfsStop) -> String {
    stop.stop_code
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

pub fn stop_id(stop: &GtfsStop) -> Result<i32, gtfs::Error> {
    if !is_digits_only(&stop.stop_id) {
        return Err(gtfs::Error::UnexpectedStopId(format!("{stop:?}")));
    }
    stop.stop_id
        .parse()
        .map_err(|_| gtfs::Error::UnexpectedStopId(format!("{stop:?}")))
}

/// The trip headsign, or its short name when the feed leaves it out.
pub fn trip_headsign(trip: &GtfsTrip) -> &str {
    trip.trip_headsign
        .as_deref()
        .or(trip.trip_short_name.as_deref())
        .unwrap_or_default()
}

pub fn merge_headsign(trip: &mut Trip, other: &Trip) -> bool {
    if other.headsign.value.is_empty() || trip.headsign.value == other.headsign.value {
        return true;
    }
    if trip.headsign.value.is_empty() {
        trip.headsign.value = other.headsign.value.clone();
        return true;
    }
    false
}

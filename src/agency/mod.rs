//! Customizations for L'Inter, the regional bus network of Transport adapté
//! et collectif des Laurentides (TaCL).

pub mod route;
mod stop;
mod trip;

use crate::{
    gtfs::{self, Config, GtfsRoute, GtfsStop, GtfsTrip},
    shared::clean,
    tools::{AgencyTools, Direction, Headsign, Route, Trip, defaults},
};

#[derive(Default)]
pub struct InterAgency {
    config: Config,
}

impl InterAgency {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl AgencyTools for InterAgency {
    fn config(&self) -> &Config {
        &self.config
    }

    fn route_id(&self, route: &GtfsRoute) -> Result<i64, gtfs::Error> {
        if defaults::is_digits_only(&route.route_id) {
            return defaults::route_id(route);
        }
        route::alias_by_code(&route.route_id)
            .map(|alias| alias.id)
            .ok_or_else(|| gtfs::Error::UnexpectedRouteId(format!("{route:?}")))
    }

    fn route_short_name(&self, route: &GtfsRoute) -> Result<Option<String>, gtfs::Error> {
        if let Some(alias) = route::alias_by_code(&route.route_id) {
            return Ok(Some(alias.short_name.to_string()));
        }
        if defaults::is_digits_only(&route.route_id) {
            return Ok(defaults::route_short_name(route));
        }
        Err(gtfs::Error::UnexpectedRouteShortName(format!("{route:?}")))
    }

    fn merge_route_long_name(&self, route: &mut Route, other: &Route) -> Result<bool, gtfs::Error> {
        if let Some(alias) = route::alias_by_id(route.id) {
            route.long_name = alias.long_name.to_string();
            return Ok(true);
        }
        Ok(defaults::merge_route_long_name(route, other))
    }

    fn stop_id(&self, stop: &GtfsStop) -> Result<i32, gtfs::Error> {
        stop::stop_id(stop, &self.stop_code(stop))
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean_french_label(name)
    }

    fn trip_headsign(&self, _route: &Route, trip: &GtfsTrip) -> Result<Headsign, gtfs::Error> {
        let headsign = defaults::trip_headsign(trip);
        let direction = match trip.direction_id {
            None => trip::direction_from_suffix(headsign),
            Some(_) => None,
        }
        .unwrap_or_else(|| Direction::from_flag(trip.direction_id));
        Ok(Headsign::new(self.clean_trip_headsign(headsign), direction))
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean_french_label(headsign)
    }

    fn merge_headsign(&self, trip: &mut Trip, other: &Trip) -> Result<bool, gtfs::Error> {
        Err(gtfs::Error::UnexpectedHeadsignMerge {
            trip: format!("{trip:?}"),
            other: format!("{other:?}"),
        })
    }
}

fn clean_french_label(text: &str) -> String {
    let text = clean::clean_points(text);
    let text = clean::clean_bounds_fr(&text);
    let text = clean::clean_street_types_fr_ca(&text);
    clean::clean_label_fr(&text)
}

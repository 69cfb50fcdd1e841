use std::{
    collections::{BTreeMap, HashMap, btree_map::Entry},
    time::Instant,
};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::{
    gtfs::{self, GtfsCalendar, GtfsCalendarDate, GtfsData, GtfsRoute, GtfsStop, GtfsTrip},
    tools::{ActiveServices, AgencyTools, Direction, Route, RunContext, ServiceIds, Stop, Trip},
};

/// What is left of a feed once the agency hooks have run.
#[derive(Debug, Default)]
pub struct Output {
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
    pub calendars: Vec<GtfsCalendar>,
    pub calendar_dates: Vec<GtfsCalendarDate>,
}

/// Runs the hooks of an [`AgencyTools`] over an in-memory feed in a fixed
/// order: service filtering, routes, stops, then trips.
pub struct Pipeline<T> {
    tools: T,
}

impl<T: AgencyTools> Pipeline<T> {
    pub fn new(tools: T) -> Self {
        Self { tools }
    }

    /// Returns `None` when every service of the agency is excluded.
    pub fn run(&self, data: GtfsData) -> Result<Option<Output>, gtfs::Error> {
        let agency_name = self.tools.agency_name();
        info!("Processing {agency_name}...");
        let now = Instant::now();

        let ctx = self.context(&data);
        if self.tools.excluding_all(&ctx) {
            warn!("Every service of {agency_name} is excluded, skipping agency");
            return Ok(None);
        }

        let GtfsData {
            routes,
            stops,
            trips,
            calendars,
            calendar_dates,
        } = data;

        let calendars: Vec<_> = calendars
            .into_iter()
            .filter(|calendar| !self.tools.exclude_calendar(&ctx, calendar))
            .collect();
        let calendar_dates: Vec<_> = calendar_dates
            .into_iter()
            .filter(|date| !self.tools.exclude_calendar_date(&ctx, date))
            .collect();
        let trips: Vec<_> = trips
            .into_iter()
            .filter(|trip| !self.tools.exclude_trip(&ctx, trip))
            .collect();
        debug!(
            "Kept {} calendars, {} calendar dates and {} trips",
            calendars.len(),
            calendar_dates.len(),
            trips.len()
        );

        let (routes, route_lookup) = self.derive_routes(&routes)?;
        let stops = self.derive_stops(&stops)?;
        let mut trips = self.derive_trips(&ctx, &routes, &route_lookup, &trips)?;
        self.merge_headsigns(&mut trips)?;

        info!("Processing {agency_name} took {:?}", now.elapsed());
        Ok(Some(Output {
            routes: routes.into_values().collect(),
            stops,
            trips,
            calendars,
            calendar_dates,
        }))
    }

    /// Interns the feed's service ids and, when exclusion is enabled, works
    /// out which services are still useful.
    pub fn context(&self, data: &GtfsData) -> RunContext {
        let service_ids = ServiceIds::from_data(data);
        let active_services = self.tools.default_exclude_enabled().then(|| {
            let today = self
                .tools
                .config()
                .service_date
                .unwrap_or_else(|| Local::now().date_naive());
            let active = ActiveServices::compute(data, &service_ids, today);
            debug!(
                "{} of {} services active on or after {today}",
                active.len(),
                service_ids.len()
            );
            active
        });
        RunContext::new(service_ids, active_services)
    }

    fn derive_routes<'a>(
        &self,
        raw_routes: &'a [GtfsRoute],
    ) -> Result<(BTreeMap<i64, Route>, HashMap<&'a str, i64>), gtfs::Error> {
        debug!("Deriving routes...");
        let now = Instant::now();
        let mut routes: BTreeMap<i64, Route> = BTreeMap::new();
        let mut lookup: HashMap<&str, i64> = HashMap::new();
        let mut raw_sorted: Vec<&GtfsRoute> = raw_routes.iter().collect();
        raw_sorted.sort_by(|a, b| a.route_id.cmp(&b.route_id));
        for raw in raw_sorted {
            let route = Route {
                id: self.tools.route_id(raw)?,
                short_name: self.tools.route_short_name(raw)?,
                long_name: self.tools.route_long_name(raw),
                color: raw.route_color.clone().filter(|color| !color.is_empty()),
            };
            lookup.insert(raw.route_id.as_str(), route.id);
            match routes.entry(route.id) {
                Entry::Vacant(entry) => {
                    entry.insert(route);
                }
                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    if !self.tools.merge_route_long_name(existing, &route)? {
                        return Err(gtfs::Error::RouteMergeFailed {
                            route_id: route.id,
                            long_name: existing.long_name.clone(),
                            other_long_name: route.long_name,
                        });
                    }
                    // First non-empty colour in route id order.
                    if existing.color.is_none() {
                        existing.color = route.color;
                    }
                }
            }
        }
        debug!(
            "Deriving {} routes from {} took {:?}",
            routes.len(),
            raw_routes.len(),
            now.elapsed()
        );
        Ok((routes, lookup))
    }

    fn derive_stops(&self, raw_stops: &[GtfsStop]) -> Result<Vec<Stop>, gtfs::Error> {
        debug!("Deriving stops...");
        let now = Instant::now();
        let mut stops: BTreeMap<i32, (Stop, &str)> = BTreeMap::new();
        let mut raw_sorted: Vec<&GtfsStop> = raw_stops.iter().collect();
        raw_sorted.sort_by(|a, b| a.stop_id.cmp(&b.stop_id));
        for raw in raw_sorted {
            let stop = Stop {
                id: self.tools.stop_id(raw)?,
                code: self.tools.stop_code(raw),
                name: self.tools.clean_stop_name(&raw.stop_name),
                latitude: raw.stop_lat,
                longitude: raw.stop_lon,
            };
            match stops.entry(stop.id) {
                Entry::Vacant(entry) => {
                    entry.insert((stop, raw.stop_id.as_str()));
                }
                Entry::Occupied(entry) => {
                    let (first, second) = {
                        let first = entry.get().1;
                        let second = raw.stop_id.as_str();
                        if first <= second {
                            (first, second)
                        } else {
                            (second, first)
                        }
                    };
                    return Err(gtfs::Error::DuplicateStopId {
                        stop_id: stop.id,
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }
        debug!("Deriving {} stops took {:?}", stops.len(), now.elapsed());
        Ok(stops.into_values().map(|(stop, _)| stop).collect())
    }

    fn derive_trips(
        &self,
        ctx: &RunContext,
        routes: &BTreeMap<i64, Route>,
        route_lookup: &HashMap<&str, i64>,
        raw_trips: &[GtfsTrip],
    ) -> Result<Vec<Trip>, gtfs::Error> {
        debug!("Deriving trips...");
        let now = Instant::now();
        let mut trips = Vec::with_capacity(raw_trips.len());
        for raw in raw_trips {
            let unknown_route = || gtfs::Error::UnknownRoute {
                trip_id: raw.trip_id.clone(),
                route_id: raw.route_id.clone(),
            };
            let route_id = *route_lookup
                .get(raw.route_id.as_str())
                .ok_or_else(unknown_route)?;
            let route = routes.get(&route_id).ok_or_else(unknown_route)?;
            let service_id = ctx
                .service_ids()
                .get(&raw.service_id)
                .ok_or_else(|| gtfs::Error::UnknownService(raw.service_id.clone()))?;
            trips.push(Trip {
                id: raw.trip_id.clone(),
                route_id,
                service_id,
                headsign: self.tools.trip_headsign(route, raw)?,
            });
        }
        trips.sort_by(|a, b| a.id.cmp(&b.id));
        debug!("Deriving {} trips took {:?}", trips.len(), now.elapsed());
        Ok(trips)
    }

    /// Trips of one route and direction are expected to share a headsign.
    /// Disagreements go through the agency's merge hook; empty headsigns then
    /// take the merged value of their direction.
    fn merge_headsigns(&self, trips: &mut [Trip]) -> Result<(), gtfs::Error> {
        let mut references: BTreeMap<(i64, Direction), Trip> = BTreeMap::new();
        for trip in trips.iter() {
            match references.entry((trip.route_id, trip.headsign.direction)) {
                Entry::Vacant(entry) => {
                    entry.insert(trip.clone());
                }
                Entry::Occupied(mut entry) => {
                    let reference = entry.get_mut();
                    if reference.headsign.value != trip.headsign.value
                        && !self.tools.merge_headsign(reference, trip)?
                    {
                        debug!(
                            "Keeping headsigns '{}' and '{}' of route {} apart",
                            reference.headsign.value, trip.headsign.value, trip.route_id
                        );
                    }
                }
            }
        }
        for trip in trips.iter_mut() {
            if trip.headsign.value.is_empty()
                && let Some(reference) = references.get(&(trip.route_id, trip.headsign.direction))
            {
                trip.headsign.value = reference.headsign.value.clone();
            }
        }
        Ok(())
    }
}

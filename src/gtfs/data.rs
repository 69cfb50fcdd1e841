use crate::gtfs::{GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsStop, GtfsTrip};

/// Raw tables of one feed, already parsed by the caller.
#[derive(Default, Debug, Clone)]
pub struct GtfsData {
    pub routes: Vec<GtfsRoute>,
    pub stops: Vec<GtfsStop>,
    pub trips: Vec<GtfsTrip>,
    pub calendars: Vec<GtfsCalendar>,
    pub calendar_dates: Vec<GtfsCalendarDate>,
}

impl From<Vec<GtfsTable>> for GtfsData {
    fn from(value: Vec<GtfsTable>) -> Self {
        let mut data = Self::default();
        value.into_iter().for_each(|table| match table {
            GtfsTable::Routes(gtfs_routes) => data.routes = gtfs_routes,
            GtfsTable::Stops(gtfs_stops) => data.stops = gtfs_stops,
            GtfsTable::Trips(gtfs_trips) => data.trips = gtfs_trips,
            GtfsTable::Calendars(gtfs_calendars) => data.calendars = gtfs_calendars,
            GtfsTable::CalendarDates(gtfs_calendar_dates) => {
                data.calendar_dates = gtfs_calendar_dates
            }
        });
        data
    }
}

#[derive(Debug)]
pub enum GtfsTable {
    Routes(Vec<GtfsRoute>),
    Stops(Vec<GtfsStop>),
    Trips(Vec<GtfsTrip>),
    Calendars(Vec<GtfsCalendar>),
    CalendarDates(Vec<GtfsCalendarDate>),
}

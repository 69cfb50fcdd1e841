use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GtfsRoute {
    pub route_id: String,
    pub agency_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub route_type: i32,
    pub route_color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GtfsStop {
    pub stop_id: String,
    pub stop_code: Option<String>,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    pub location_type: Option<u8>,
    pub parent_station: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GtfsTrip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub trip_headsign: Option<String>,
    pub trip_short_name: Option<String>,
    pub direction_id: Option<u8>,
    pub shape_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsCalendar {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    #[serde(with = "gtfs_date")]
    pub start_date: NaiveDate,
    #[serde(with = "gtfs_date")]
    pub end_date: NaiveDate,
}

impl GtfsCalendar {
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        let flag = match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        };
        flag == 1
    }

    /// Every date in `[max(start_date, from), end_date]` the calendar runs on.
    pub fn dates_from(&self, from: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        let first = self.start_date.max(from);
        first
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
            .filter(move |date| self.runs_on(date.weekday()))
    }
}

pub const EXCEPTION_ADDED: u8 = 1;
pub const EXCEPTION_REMOVED: u8 = 2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsCalendarDate {
    pub service_id: String,
    #[serde(with = "gtfs_date")]
    pub date: NaiveDate,
    pub exception_type: u8,
}

impl GtfsCalendarDate {
    pub fn is_added(&self) -> bool {
        self.exception_type == EXCEPTION_ADDED
    }

    pub fn is_removed(&self) -> bool {
        self.exception_type == EXCEPTION_REMOVED
    }
}

/// GTFS dates are written `YYYYMMDD`.
pub mod gtfs_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(value.trim(), FORMAT).map_err(de::Error::custom)
    }
}

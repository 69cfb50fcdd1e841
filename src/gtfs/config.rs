use chrono::NaiveDate;

pub const ROUTE_TYPE_BUS: i32 = 3;

pub struct Config {
    pub agency_name: String,
    /// Hex color without the leading `#`.
    pub agency_color: String,
    pub route_type: i32,
    /// Drop calendars, calendar dates and trips of services that no longer run.
    pub exclude_enabled: bool,
    pub direction_splitter_enabled: bool,
    pub direction_finder_enabled: bool,
    /// Date the feed is evaluated against. Defaults to today.
    pub service_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agency_name: "L'Inter (TaCL)".into(),
            agency_color: "E76525".into(),
            route_type: ROUTE_TYPE_BUS,
            exclude_enabled: true,
            direction_splitter_enabled: true,
            direction_finder_enabled: true,
            service_date: None,
        }
    }
}

impl Config {
    pub fn with_service_date(mut self, date: NaiveDate) -> Self {
        self.service_date = Some(date);
        self
    }
}

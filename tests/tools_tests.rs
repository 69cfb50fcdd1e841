use tacl_inter::{
    gtfs::{self, Config, GtfsRoute, GtfsStop, GtfsTrip},
    tools::{AgencyTools, Direction, Headsign, Route, Trip, defaults},
};

/// An agency that keeps every generic behaviour.
#[derive(Default)]
struct PlainAgency {
    config: Config,
}

impl AgencyTools for PlainAgency {
    fn config(&self) -> &Config {
        &self.config
    }
}

#[test]
fn digits_only_test() {
    assert!(defaults::is_digits_only("0042"));
    assert!(!defaults::is_digits_only(""));
    assert!(!defaults::is_digits_only("42A"));
    assert!(!defaults::is_digits_only("-42"));
    assert!(!defaults::is_digits_only("４２"));
}

#[test]
fn default_route_test() {
    let agency = PlainAgency::default();
    let route = GtfsRoute {
        route_id: "42".into(),
        route_short_name: Some(" 42 ".into()),
        route_long_name: Some("  Saint-Jérôme   Mont-Laurier ".into()),
        ..Default::default()
    };
    assert_eq!(agency.route_id(&route).unwrap(), 42);
    assert_eq!(agency.route_short_name(&route).unwrap().as_deref(), Some("42"));
    assert_eq!(agency.route_long_name(&route), "Saint-Jérôme Mont-Laurier");

    let lettered = GtfsRoute {
        route_id: "ZCN".into(),
        ..Default::default()
    };
    assert!(matches!(
        agency.route_id(&lettered),
        Err(gtfs::Error::UnexpectedRouteId(_))
    ));
    assert_eq!(agency.route_short_name(&lettered).unwrap(), None);
}

#[test]
fn default_stop_test() {
    let agency = PlainAgency::default();
    let stop = GtfsStop {
        stop_id: "1234".into(),
        stop_code: Some(" 12N ".into()),
        ..Default::default()
    };
    assert_eq!(agency.stop_id(&stop).unwrap(), 1234);
    assert_eq!(agency.stop_code(&stop), "12N");

    let lettered = GtfsStop {
        stop_id: "12N".into(),
        ..Default::default()
    };
    assert!(agency.stop_id(&lettered).is_err());
}

#[test]
fn default_headsign_test() {
    let agency = PlainAgency::default();
    let trip = GtfsTrip {
        trip_headsign: Some("Gare  (Nord)".into()),
        direction_id: Some(1),
        ..Default::default()
    };
    let headsign = agency.trip_headsign(&Route::default(), &trip).unwrap();
    assert_eq!(headsign, Headsign::new("Gare (Nord)", Direction::Id(1)));
}

#[test]
fn default_merge_headsign_test() {
    let agency = PlainAgency::default();
    let mut trip = Trip {
        id: "T1".into(),
        route_id: 42,
        service_id: 0,
        headsign: Headsign::new("", Direction::Id(0)),
    };
    let other = Trip {
        id: "T2".into(),
        headsign: Headsign::new("Gare", Direction::Id(0)),
        ..trip.clone()
    };
    assert!(agency.merge_headsign(&mut trip, &other).unwrap());
    assert_eq!(trip.headsign.value, "Gare");

    let conflicting = Trip {
        headsign: Headsign::new("Terminus", Direction::Id(0)),
        ..other.clone()
    };
    assert!(!agency.merge_headsign(&mut trip, &conflicting).unwrap());
    assert_eq!(trip.headsign.value, "Gare");
}

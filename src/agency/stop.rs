use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    gtfs::{self, GtfsStop},
    tools::defaults,
};

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").unwrap();
}

// Lettered stops share their digits across directions, so each direction
// gets its own block of ids.
const NORTH_STOP_OFFSET: i32 = 140_000;
const SOUTH_STOP_OFFSET: i32 = 190_000;

pub(crate) fn stop_id(stop: &GtfsStop, code: &str) -> Result<i32, gtfs::Error> {
    if defaults::is_digits_only(code) {
        return code
            .parse()
            .map_err(|_| gtfs::Error::StopIdOverflow(format!("{stop:?}")));
    }
    let digits: i32 = DIGITS
        .find(code)
        .ok_or_else(|| gtfs::Error::UnexpectedStopId(format!("{stop:?}")))?
        .as_str()
        .parse()
        .map_err(|_| gtfs::Error::StopIdOverflow(format!("{stop:?}")))?;
    let offset = if code.ends_with('N') {
        NORTH_STOP_OFFSET
    } else if stop.stop_id.ends_with('S') {
        SOUTH_STOP_OFFSET
    } else {
        return Err(gtfs::Error::StopWithoutDirection(format!("{stop:?}")));
    };
    offset
        .checked_add(digits)
        .ok_or_else(|| gtfs::Error::StopIdOverflow(format!("{stop:?}")))
}

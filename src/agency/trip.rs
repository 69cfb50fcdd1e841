use crate::tools::Direction;

/// Headsign endings the feed uses to tell the two directions of a route apart.
const DIRECTION_SUFFIXES: &[(&str, Direction)] = &[
    (" (Sud)", Direction::South),
    (" (Nord)", Direction::North),
];

pub(crate) fn direction_from_suffix(headsign: &str) -> Option<Direction> {
    DIRECTION_SUFFIXES
        .iter()
        .find(|(suffix, _)| headsign.ends_with(suffix))
        .map(|(_, direction)| *direction)
}

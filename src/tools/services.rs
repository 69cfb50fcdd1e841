use std::{
    collections::{BTreeSet, HashMap, HashSet},
    sync::Arc,
};

use chrono::NaiveDate;

use crate::gtfs::GtfsData;

/// Maps every service id string of a feed to a small integer.
/// Ids are assigned in sorted order so the mapping only depends on the feed.
#[derive(Debug, Default, Clone)]
pub struct ServiceIds {
    lookup: HashMap<Arc<str>, u32>,
}

impl ServiceIds {
    pub fn from_data(data: &GtfsData) -> Self {
        let names: BTreeSet<&str> = data
            .calendars
            .iter()
            .map(|calendar| calendar.service_id.as_str())
            .chain(data.calendar_dates.iter().map(|date| date.service_id.as_str()))
            .chain(data.trips.iter().map(|trip| trip.service_id.as_str()))
            .collect();
        let lookup = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (Arc::from(name), i as u32))
            .collect();
        Self { lookup }
    }

    pub fn get(&self, service_id: &str) -> Option<u32> {
        self.lookup.get(service_id).copied()
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// Services that still run on or after the service date and carry at least
/// one trip.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveServices(HashSet<u32>);

impl ActiveServices {
    pub fn compute(data: &GtfsData, ids: &ServiceIds, today: NaiveDate) -> Self {
        let removed: HashSet<(&str, NaiveDate)> = data
            .calendar_dates
            .iter()
            .filter(|date| date.is_removed())
            .map(|date| (date.service_id.as_str(), date.date))
            .collect();

        let mut running: HashSet<&str> = data
            .calendars
            .iter()
            .filter(|calendar| {
                calendar
                    .dates_from(today)
                    .any(|date| !removed.contains(&(calendar.service_id.as_str(), date)))
            })
            .map(|calendar| calendar.service_id.as_str())
            .collect();
        running.extend(
            data.calendar_dates
                .iter()
                .filter(|date| date.is_added() && date.date >= today)
                .map(|date| date.service_id.as_str()),
        );

        let active = data
            .trips
            .iter()
            .map(|trip| trip.service_id.as_str())
            .filter(|service_id| running.contains(service_id))
            .filter_map(|service_id| ids.get(service_id))
            .collect();
        Self(active)
    }

    pub fn contains(&self, service: u32) -> bool {
        self.0.contains(&service)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active service integers in ascending order.
    pub fn sorted(&self) -> Vec<u32> {
        let mut services: Vec<u32> = self.0.iter().copied().collect();
        services.sort_unstable();
        services
    }
}

impl FromIterator<u32> for ActiveServices {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

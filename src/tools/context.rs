use crate::tools::{ActiveServices, ServiceIds};

/// State of one run, built before the first hook is called and read-only
/// afterwards.
#[derive(Debug, Default)]
pub struct RunContext {
    service_ids: ServiceIds,
    active_services: Option<ActiveServices>,
}

impl RunContext {
    pub fn new(service_ids: ServiceIds, active_services: Option<ActiveServices>) -> Self {
        Self {
            service_ids,
            active_services,
        }
    }

    pub fn service_ids(&self) -> &ServiceIds {
        &self.service_ids
    }

    /// None when exclusion is disabled for the run.
    pub fn active_services(&self) -> Option<&ActiveServices> {
        self.active_services.as_ref()
    }

    /// False whenever no active set was computed.
    pub fn excludes_service(&self, service_id: &str) -> bool {
        match &self.active_services {
            None => false,
            Some(active) => !self
                .service_ids
                .get(service_id)
                .is_some_and(|service| active.contains(service)),
        }
    }

    pub fn excluding_all(&self) -> bool {
        self.active_services
            .as_ref()
            .is_some_and(ActiveServices::is_empty)
    }
}

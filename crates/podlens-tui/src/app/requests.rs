/// Kinds of data fetched from the inventory provider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Namespaces,
    Workloads,
    Logs,
}

/// Latest sequence number issued per resource.
///
/// A result is only applied when it answers the most recent request of its
/// kind; anything older was overtaken or abandoned.
#[derive(Debug, Default)]
pub struct RequestTracker {
    namespaces: u64,
    workloads: u64,
    logs: u64,
}

impl RequestTracker {
    fn slot(&mut self, resource: Resource) -> &mut u64 {
        match resource {
            Resource::Namespaces => &mut self.namespaces,
            Resource::Workloads => &mut self.workloads,
            Resource::Logs => &mut self.logs,
        }
    }

    /// Sequence number for a new request
    pub fn issue(&mut self, resource: Resource) -> u64 {
        let slot = self.slot(resource);
        *slot += 1;
        *slot
    }

    /// Make every in-flight request of this kind stale
    pub fn invalidate(&mut self, resource: Resource) {
        *self.slot(resource) += 1;
    }

    pub fn is_current(&self, resource: Resource, seq: u64) -> bool {
        let latest = match resource {
            Resource::Namespaces => self.namespaces,
            Resource::Workloads => self.workloads,
            Resource::Logs => self.logs,
        };
        seq == latest
    }
}

use std::time::{Duration, Instant};

use podlens_types::{FetchError, WorkloadSummary};

use super::Action;

/// Everything the state machine reacts to, delivered one at a time
#[derive(Debug)]
pub enum Message {
    /// A key press resolved to an action
    Action(Action),
    Resize {
        width: u16,
        height: u16,
    },
    /// One link of the auto-refresh timer chain
    Tick {
        generation: u64,
        at: Instant,
    },
    NamespacesLoaded {
        seq: u64,
        result: Result<Vec<String>, FetchError>,
    },
    WorkloadsLoaded {
        seq: u64,
        result: Result<Vec<WorkloadSummary>, FetchError>,
    },
    LogsLoaded {
        seq: u64,
        workload: String,
        result: Result<String, FetchError>,
    },
    /// The terminal event stream failed
    TerminalError(String),
}

/// Side effects requested by the state machine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    FetchNamespaces {
        seq: u64,
    },
    FetchWorkloads {
        seq: u64,
        namespace: String,
    },
    FetchLogs {
        seq: u64,
        namespace: String,
        workload: String,
    },
    ScheduleTick {
        generation: u64,
        delay: Duration,
    },
    Quit,
}

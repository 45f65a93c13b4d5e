use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Pod;

use podlens_types::{AgeBucket, WorkloadSummary};

/// Waiting reasons that say more than the bare pod phase
const SURFACED_WAITING_REASONS: [&str; 4] = [
    "CrashLoopBackOff",
    "ImagePullBackOff",
    "ErrImagePull",
    "ContainerCreating",
];

/// Build a summary row from a pod object
pub(crate) fn summarize_pod(pod: &Pod, now: DateTime<Utc>) -> WorkloadSummary {
    let status = pod.status.as_ref();
    let first_container = status
        .and_then(|s| s.container_statuses.as_ref())
        .and_then(|statuses| statuses.first());

    let waiting_reason = first_container
        .and_then(|c| c.state.as_ref())
        .and_then(|state| state.waiting.as_ref())
        .and_then(|waiting| waiting.reason.as_deref());

    let phase = derive_phase(
        status.and_then(|s| s.phase.as_deref()),
        pod.metadata.deletion_timestamp.is_some(),
        waiting_reason,
    );

    let ready = status
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Ready" && c.status == "True")
        });

    let mut summary = WorkloadSummary::new(pod.metadata.name.clone().unwrap_or_default(), phase);
    summary.ready = ready;
    summary.restarts = first_container
        .map(|c| c.restart_count.max(0) as u32)
        .unwrap_or(0);
    summary.age = AgeBucket::between(
        pod.metadata.creation_timestamp.as_ref().map(|t| t.0),
        now,
    );
    summary
}

/// Phase shown for a pod: deletion wins, then a telling waiting reason,
/// then the reported phase
pub(crate) fn derive_phase(
    phase: Option<&str>,
    deleting: bool,
    waiting_reason: Option<&str>,
) -> String {
    if deleting {
        return "Terminating".to_string();
    }
    if let Some(reason) = waiting_reason {
        if SURFACED_WAITING_REASONS.contains(&reason) {
            return reason.to_string();
        }
    }
    phase.unwrap_or("Unknown").to_string()
}

//! Kubernetes inventory providers for podlens
//!
//! This crate supplies namespace lists, workload summaries, and raw log text,
//! either through the Kubernetes API or by shelling out to `kubectl`.

mod client;
mod kubectl;
mod provider;
mod summary;

pub use client::KubeProvider;
pub use kubectl::KubectlProvider;
pub use provider::{InventoryProvider, Provider, ProviderKind};

// Re-export types that are used in our public API
pub use podlens_types::{AgeBucket, Lookback, WorkloadSummary};

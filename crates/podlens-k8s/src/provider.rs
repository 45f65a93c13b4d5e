use std::future::Future;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::Deserialize;

use podlens_types::{Lookback, WorkloadSummary};

use crate::{KubeProvider, KubectlProvider};

/// Source of namespaces, workloads, and log text.
///
/// Calls are independent of each other and may run concurrently.
pub trait InventoryProvider: Send + Sync + 'static {
    /// Names of all namespaces visible to the current credentials
    fn list_namespaces(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Workloads in `namespace`, in provider order
    fn list_workloads(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<WorkloadSummary>>> + Send;

    /// Raw log text of `workload` covering the last `lookback`
    fn fetch_logs(
        &self,
        namespace: &str,
        workload: &str,
        lookback: &Lookback,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Which provider implementation to use
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Talk to the API server directly
    #[default]
    Api,
    /// Shell out to the `kubectl` binary
    Kubectl,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "kubectl" => Ok(Self::Kubectl),
            other => bail!("unknown provider '{}' (expected 'api' or 'kubectl')", other),
        }
    }
}

/// Runtime-selected provider
pub enum Provider {
    Api(KubeProvider),
    Kubectl(KubectlProvider),
}

impl Provider {
    /// Build the provider of the given kind for an optional kubeconfig context
    pub async fn connect(kind: ProviderKind, context: Option<&str>) -> Result<Self> {
        match kind {
            ProviderKind::Api => Ok(Self::Api(KubeProvider::connect(context).await?)),
            ProviderKind::Kubectl => Ok(Self::Kubectl(KubectlProvider::new(
                context.map(str::to_string),
            ))),
        }
    }
}

impl InventoryProvider for Provider {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        match self {
            Self::Api(provider) => provider.list_namespaces().await,
            Self::Kubectl(provider) => provider.list_namespaces().await,
        }
    }

    async fn list_workloads(&self, namespace: &str) -> Result<Vec<WorkloadSummary>> {
        match self {
            Self::Api(provider) => provider.list_workloads(namespace).await,
            Self::Kubectl(provider) => provider.list_workloads(namespace).await,
        }
    }

    async fn fetch_logs(
        &self,
        namespace: &str,
        workload: &str,
        lookback: &Lookback,
    ) -> Result<String> {
        match self {
            Self::Api(provider) => provider.fetch_logs(namespace, workload, lookback).await,
            Self::Kubectl(provider) => provider.fetch_logs(namespace, workload, lookback).await,
        }
    }
}

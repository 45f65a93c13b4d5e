use anyhow::{Context, Result};
use chrono::Utc;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::Api;
use kube::api::{ListParams, LogParams};
use kube::config::KubeConfigOptions;
use tracing::debug;

use podlens_types::{Lookback, WorkloadSummary};

use crate::InventoryProvider;
use crate::summary::summarize_pod;

/// Provider backed by the Kubernetes API
pub struct KubeProvider {
    client: kube::Client,
}

impl KubeProvider {
    /// Connect using the given kubeconfig context, or the inferred default
    pub async fn connect(context: Option<&str>) -> Result<Self> {
        let config = match context {
            Some(name) => kube::Config::from_kubeconfig(&KubeConfigOptions {
                context: Some(name.to_string()),
                ..Default::default()
            })
            .await
            .with_context(|| format!("Failed to create config for context: {}", name))?,
            None => kube::Config::infer()
                .await
                .context("Failed to read kubeconfig. Is kubectl configured?")?,
        };

        let client = kube::Client::try_from(config).context("Failed to create Kubernetes client")?;

        Ok(Self { client })
    }
}

impl InventoryProvider for KubeProvider {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let list = namespaces
            .list(&ListParams::default())
            .await
            .context("Failed to list namespaces")?;

        debug!(count = list.items.len(), "listed namespaces");

        Ok(list
            .items
            .into_iter()
            .filter_map(|ns| ns.metadata.name)
            .collect())
    }

    async fn list_workloads(&self, namespace: &str) -> Result<Vec<WorkloadSummary>> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = pods
            .list(&ListParams::default())
            .await
            .with_context(|| format!("Failed to list pods in namespace {}", namespace))?;

        debug!(namespace, count = list.items.len(), "listed pods");

        let now = Utc::now();
        Ok(list
            .items
            .iter()
            .map(|pod| summarize_pod(pod, now))
            .collect())
    }

    async fn fetch_logs(
        &self,
        namespace: &str,
        workload: &str,
        lookback: &Lookback,
    ) -> Result<String> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let params = LogParams {
            since_seconds: Some(lookback.as_seconds()),
            ..LogParams::default()
        };

        let logs = pods
            .logs(workload, &params)
            .await
            .with_context(|| format!("Failed to load logs for {}/{}", namespace, workload))?;

        debug!(namespace, workload, bytes = logs.len(), "fetched logs");

        Ok(logs)
    }
}

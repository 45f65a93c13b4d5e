use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{Namespace, Pod};
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use podlens_types::{Lookback, WorkloadSummary};

use crate::InventoryProvider;
use crate::summary::summarize_pod;

/// Provider that shells out to the `kubectl` CLI
pub struct KubectlProvider {
    binary: String,
    context: Option<String>,
}

/// The `items` array of a `kubectl get -o json` list
#[derive(Deserialize)]
struct ItemList<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl KubectlProvider {
    pub fn new(context: Option<String>) -> Self {
        Self {
            binary: "kubectl".to_string(),
            context,
        }
    }

    /// Use a different kubectl executable
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    async fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let mut command = Command::new(&self.binary);
        if let Some(context) = &self.context {
            command.arg("--context").arg(context);
        }
        command.args(args);

        debug!(binary = %self.binary, ?args, "running kubectl");

        let output = command
            .output()
            .await
            .with_context(|| format!("Failed to run {}. Is it installed?", self.binary))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} {} failed ({}): {}",
                self.binary,
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        Ok(output.stdout)
    }
}

impl InventoryProvider for KubectlProvider {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["get", "namespaces", "-o", "json"]).await?;
        parse_namespaces(&stdout)
    }

    async fn list_workloads(&self, namespace: &str) -> Result<Vec<WorkloadSummary>> {
        let stdout = self
            .run(&["get", "pods", "-n", namespace, "-o", "json"])
            .await?;
        parse_workloads(&stdout, Utc::now())
    }

    async fn fetch_logs(
        &self,
        namespace: &str,
        workload: &str,
        lookback: &Lookback,
    ) -> Result<String> {
        let since = format!("--since={}", lookback.as_str());
        let stdout = self
            .run(&["logs", "-n", namespace, workload, &since])
            .await?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

fn parse_namespaces(json: &[u8]) -> Result<Vec<String>> {
    let list: ItemList<Namespace> =
        serde_json::from_slice(json).context("Failed to parse kubectl namespace list")?;

    Ok(list
        .items
        .into_iter()
        .filter_map(|ns| ns.metadata.name)
        .collect())
}

fn parse_workloads(json: &[u8], now: DateTime<Utc>) -> Result<Vec<WorkloadSummary>> {
    let list: ItemList<Pod> =
        serde_json::from_slice(json).context("Failed to parse kubectl pod list")?;

    Ok(list
        .items
        .iter()
        .map(|pod| summarize_pod(pod, now))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use podlens_types::AgeBucket;

    #[test]
    fn test_parse_namespaces() {
        let json = br#"{
            "apiVersion": "v1",
            "kind": "List",
            "items": [
                {"apiVersion": "v1", "kind": "Namespace", "metadata": {"name": "default"}},
                {"apiVersion": "v1", "kind": "Namespace", "metadata": {"name": "kube-system"}}
            ]
        }"#;

        let namespaces = parse_namespaces(json).unwrap();
        assert_eq!(namespaces, vec!["default", "kube-system"]);
    }

    #[test]
    fn test_parse_empty_list() {
        let json = br#"{"apiVersion": "v1", "kind": "List", "items": []}"#;
        assert!(parse_namespaces(json).unwrap().is_empty());
        assert!(parse_workloads(br#"{"kind": "List"}"#, Utc::now()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_workloads() {
        let json = br#"{
            "apiVersion": "v1",
            "kind": "List",
            "items": [{
                "apiVersion": "v1",
                "kind": "Pod",
                "metadata": {
                    "name": "web-5c6b",
                    "namespace": "shop",
                    "creationTimestamp": "2025-07-25T10:00:00Z"
                },
                "status": {
                    "phase": "Running",
                    "conditions": [
                        {"type": "Initialized", "status": "True"},
                        {"type": "Ready", "status": "False"}
                    ],
                    "containerStatuses": [{
                        "name": "web",
                        "image": "nginx",
                        "imageID": "",
                        "ready": false,
                        "restartCount": 12,
                        "state": {"waiting": {"reason": "CrashLoopBackOff"}}
                    }]
                }
            }]
        }"#;

        let now = Utc.with_ymd_and_hms(2025, 7, 27, 16, 0, 0).unwrap();
        let workloads = parse_workloads(json, now).unwrap();
        assert_eq!(workloads.len(), 1);

        let web = &workloads[0];
        assert_eq!(web.name, "web-5c6b");
        assert_eq!(web.phase, "CrashLoopBackOff");
        assert!(!web.ready);
        assert_eq!(web.restarts, 12);
        assert_eq!(web.age, AgeBucket::Days(2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_workloads(b"error: the server doesn't have a resource type", Utc::now()).is_err());
    }

    #[tokio::test]
    async fn test_missing_binary_is_an_error() {
        let provider = KubectlProvider::new(None).with_binary("podlens-no-such-kubectl");
        let err = provider.list_namespaces().await.unwrap_err();
        assert!(format!("{:#}", err).contains("podlens-no-such-kubectl"));
    }
}

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use podlens_k8s::InventoryProvider;
use podlens_types::{FetchError, Lookback};

use super::{Command, Message};

/// Runs commands from the state machine as background tasks.
///
/// Every task posts exactly one message back on the shared queue; nothing is
/// cancelled, stale answers are filtered by the state machine instead.
pub struct Dispatcher<P> {
    provider: Arc<P>,
    lookback: Lookback,
    sender: mpsc::UnboundedSender<Message>,
}

impl<P: InventoryProvider> Dispatcher<P> {
    pub fn new(provider: P, lookback: Lookback, sender: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            provider: Arc::new(provider),
            lookback,
            sender,
        }
    }

    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    pub fn dispatch(&self, command: Command) {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender.clone();

        match command {
            Command::FetchNamespaces { seq } => {
                debug!(seq, "fetching namespaces");
                tokio::spawn(async move {
                    let result = provider.list_namespaces().await.map_err(|e| {
                        warn!(error = %format!("{:#}", e), "namespace fetch failed");
                        FetchError::Namespaces(format!("{:#}", e))
                    });
                    let _ = sender.send(Message::NamespacesLoaded { seq, result });
                });
            }

            Command::FetchWorkloads { seq, namespace } => {
                debug!(seq, namespace = %namespace, "fetching workloads");
                tokio::spawn(async move {
                    let result = provider.list_workloads(&namespace).await.map_err(|e| {
                        warn!(error = %format!("{:#}", e), namespace = %namespace, "workload fetch failed");
                        FetchError::Workloads {
                            namespace: namespace.clone(),
                            message: format!("{:#}", e),
                        }
                    });
                    let _ = sender.send(Message::WorkloadsLoaded { seq, result });
                });
            }

            Command::FetchLogs {
                seq,
                namespace,
                workload,
            } => {
                debug!(seq, namespace = %namespace, workload = %workload, "fetching logs");
                let lookback = self.lookback.clone();
                tokio::spawn(async move {
                    let result = provider
                        .fetch_logs(&namespace, &workload, &lookback)
                        .await
                        .map_err(|e| {
                            warn!(error = %format!("{:#}", e), workload = %workload, "log fetch failed");
                            FetchError::Logs {
                                workload: workload.clone(),
                                message: format!("{:#}", e),
                            }
                        });
                    let _ = sender.send(Message::LogsLoaded {
                        seq,
                        workload,
                        result,
                    });
                });
            }

            Command::ScheduleTick { generation, delay } => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = sender.send(Message::Tick {
                        generation,
                        at: Instant::now(),
                    });
                });
            }

            // Handled by the main loop
            Command::Quit => {}
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

/// Owner of the process-wide "is the catalog reachable" flag.
///
/// Readers subscribe and see the latest pushed value; nothing in the read
/// path probes the network.
#[derive(Clone, Debug)]
pub struct ConnectivityMonitor {
    tx: Arc<watch::Sender<bool>>,
}

impl ConnectivityMonitor {
    pub fn new(initially_connected: bool) -> Self {
        let (tx, _rx) = watch::channel(initially_connected);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    pub fn is_connected(&self) -> bool {
        *self.tx.borrow()
    }

    /// Publishes a new value; subscribers are only woken on an actual change.
    pub fn set_connected(&self, connected: bool) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == connected {
                false
            } else {
                *current = connected;
                true
            }
        });
        if changed {
            if connected {
                info!("📶 Catalog reachable again");
            } else {
                warn!("📴 Catalog unreachable, switching to offline mode");
            }
        }
    }

    /// Periodically checks that `probe_url` answers at all and publishes the
    /// outcome. Abort the returned handle to stop probing.
    pub fn spawn_probe(
        &self,
        http: reqwest::Client,
        probe_url: Url,
        every: Duration,
    ) -> JoinHandle<()> {
        let monitor = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let reachable = match http.head(probe_url.clone()).send().await {
                    // Any status proves the host answered
                    Ok(response) => {
                        debug!(status = %response.status(), "connectivity probe answered");
                        true
                    }
                    Err(e) => {
                        debug!(error = %e, "connectivity probe failed");
                        !(e.is_connect() || e.is_timeout())
                    }
                };
                monitor.set_connected(reachable);
            }
        })
    }
}

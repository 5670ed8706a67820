//! Backend reachability probe.
//!
//! Runs at startup, whenever the page becomes visible again, and on a
//! configurable interval. Only the connectivity flag (and a stale `error`
//! phase) is touched; an in-flight request keeps its `loading` phase.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use super::ModelHandle;
use crate::net::api::Backend;

/// Health checker sharing the conversation model with the controller.
#[derive(Clone, Debug)]
pub struct ConnectionMonitor<B, S> {
    backend: B,
    store: S,
}

impl<B: Backend, S: ModelHandle> ConnectionMonitor<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self { backend, store }
    }

    /// Check `/health` and record the result. Returns the new `connected` value.
    pub async fn probe(&self) -> bool {
        let connected = match self.backend.check_health().await {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("health probe failed: {err}");
                false
            }
        };
        self.store.mutate(|m| {
            m.state.set_connected(connected);
            if connected {
                m.state.recover();
            }
        });
        connected
    }
}

#[cfg(feature = "csr")]
impl<B, S> ConnectionMonitor<B, S>
where
    B: Backend + Clone + 'static,
    S: ModelHandle + 'static,
{
    /// Probe now and then every `interval` for the rest of the page session.
    pub fn spawn_periodic(self, interval: Option<std::time::Duration>) {
        leptos::task::spawn_local(async move {
            self.probe().await;
            let Some(interval) = interval else {
                return;
            };
            loop {
                gloo_timers::future::sleep(interval).await;
                self.probe().await;
            }
        });
    }

    /// Fire a single probe without waiting for it.
    pub fn spawn_probe(&self) {
        let monitor = self.clone();
        leptos::task::spawn_local(async move {
            monitor.probe().await;
        });
    }
}

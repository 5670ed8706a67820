//! Client configuration: backend paths and probe cadence.
//!
//! The defaults match the backend's routing (`/v1` prefix for chat routes,
//! unprefixed `/health`). In the browser the API base can be overridden with
//! `<meta name="netbot-api-base" content="...">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/v1";
pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(30);

#[cfg(feature = "csr")]
const API_BASE_META: &str = "netbot-api-base";

/// Where the backend lives and how often to check it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to the chat routes.
    pub api_base: String,
    /// Health check path; not prefixed.
    pub health_path: String,
    /// Interval between background health probes. `None` disables them.
    pub probe_interval: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            health_path: DEFAULT_HEALTH_PATH.to_owned(),
            probe_interval: Some(DEFAULT_PROBE_INTERVAL),
        }
    }
}

impl ClientConfig {
    /// Replace the API base, dropping any trailing slash.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_owned();
        self
    }

    /// `POST` target for chat messages.
    #[must_use]
    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.api_base)
    }

    /// `GET` target for the help text.
    #[must_use]
    pub fn help_endpoint(&self) -> String {
        format!("{}/chat/help", self.api_base)
    }

    #[must_use]
    pub fn health_endpoint(&self) -> &str {
        &self.health_path
    }

    /// Defaults, with the API base taken from the page's meta tag when present.
    #[must_use]
    pub fn from_document() -> Self {
        let config = Self::default();
        #[cfg(feature = "csr")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            let base = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .filter(|content| !content.trim().is_empty());
            if let Some(base) = base {
                leptos::logging::log!("api base overridden: {base}");
                return config.with_api_base(base.trim());
            }
        }
        config
    }
}

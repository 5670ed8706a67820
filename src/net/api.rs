//! REST calls to the chat backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses and undecodable bodies all surface as
//! `ApiError`; the controller decides what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::error::ApiError;
use super::types::{ChatResponse, HelpResponse};
use crate::config::ClientConfig;

/// The three backend calls the conversation needs.
///
/// Futures are not required to be `Send`; everything runs on the browser's
/// single thread.
pub trait Backend {
    /// `POST {base}/chat` with `{ "message": message }`.
    fn send_chat(&self, message: &str) -> impl Future<Output = Result<ChatResponse, ApiError>>;

    /// `GET {base}/chat/help`.
    fn fetch_help(&self) -> impl Future<Output = Result<HelpResponse, ApiError>>;

    /// `GET /health`; `Ok` means the backend answered with 2xx.
    fn check_health(&self) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`Backend`] over `fetch`, rooted at the configured paths.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Backend for HttpBackend {
    async fn send_chat(&self, message: &str) -> Result<ChatResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = super::types::ChatRequest { message: message.to_owned() };
            let resp = gloo_net::http::Request::post(&self.config.chat_endpoint())
                .json(&body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ApiError::check_status(resp.status())?;
            resp.json::<ChatResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            unavailable(&self.config.chat_endpoint())
        }
    }

    async fn fetch_help(&self) -> Result<HelpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.help_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ApiError::check_status(resp.status())?;
            resp.json::<HelpResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&self.config.help_endpoint())
        }
    }

    async fn check_health(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(self.config.health_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            ApiError::check_status(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(self.config.health_endpoint())
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable<T>(endpoint: &str) -> Result<T, ApiError> {
    leptos::logging::warn!("{endpoint}: HTTP calls need the browser build");
    Err(ApiError::Unavailable)
}

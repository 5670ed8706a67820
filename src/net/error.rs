//! Transport-level failures talking to the backend.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A request that never produced a usable 2xx reply.
///
/// A 2xx reply whose `status` is `"error"` is not an `ApiError`; the
/// controller treats that as a backend-reported failure.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Map a non-2xx status code, passing successes through.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any status outside `200..=299`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) { Ok(()) } else { Err(Self::Status(status)) }
    }
}

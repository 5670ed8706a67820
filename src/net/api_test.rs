use super::*;

#[test]
fn http_backend_keeps_config() {
    let backend = HttpBackend::new(ClientConfig::default().with_api_base("/api"));
    assert_eq!(backend.config.chat_endpoint(), "/api/chat");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_calls_are_unavailable() {
    let backend = HttpBackend::default();
    assert_eq!(futures::executor::block_on(backend.send_chat("hi")), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(backend.fetch_help()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(backend.check_health()), Err(ApiError::Unavailable));
}

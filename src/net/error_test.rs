use super::*;

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(ApiError::check_status(200), Ok(()));
    assert_eq!(ApiError::check_status(204), Ok(()));
    assert_eq!(ApiError::check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(ApiError::check_status(199), Err(ApiError::Status(199)));
    assert_eq!(ApiError::check_status(301), Err(ApiError::Status(301)));
    assert_eq!(ApiError::check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn display_messages() {
    assert_eq!(ApiError::Status(503).to_string(), "HTTP error! status: 503");
    assert_eq!(ApiError::Network("refused".to_owned()).to_string(), "network error: refused");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

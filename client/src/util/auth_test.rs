use super::*;

#[test]
fn unauthorized_means_session_expired() {
    assert!(is_session_expired(&ApiError::Unauthorized));
}

#[test]
fn other_failures_do_not_expire_session() {
    assert!(!is_session_expired(&ApiError::Network("offline".to_owned())));
    assert!(!is_session_expired(&ApiError::Status { status: 403, message: "forbidden".to_owned() }));
    assert!(!is_session_expired(&ApiError::Unavailable));
}

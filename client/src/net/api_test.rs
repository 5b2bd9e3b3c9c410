use super::*;

fn query(locations: &[&str], categories: &[&str], page: u32) -> ItemQuery {
    ItemQuery {
        locations: locations.iter().map(|s| (*s).to_owned()).collect(),
        categories: categories.iter().map(|s| (*s).to_owned()).collect(),
        page,
    }
}

#[test]
fn lost_items_query_params_only_page_when_unfiltered() {
    assert_eq!(lost_items_query_params(&query(&[], &[], 1)), vec![("page", "1".to_owned())]);
}

#[test]
fn lost_items_query_params_repeats_filter_keys_in_selection_order() {
    let params = lost_items_query_params(&query(&["Library", "Cafeteria"], &["Electronics"], 3));
    assert_eq!(
        params,
        vec![
            ("location", "Library".to_owned()),
            ("location", "Cafeteria".to_owned()),
            ("category", "Electronics".to_owned()),
            ("page", "3".to_owned()),
        ]
    );
}

#[test]
fn error_message_prefers_backend_message() {
    assert_eq!(error_message(401, r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
    assert_eq!(error_message(500, r#"{"error":"db down"}"#), "db down");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(error_message(500, r#"{"message":"   "}"#), "request failed: 500");
}

#[test]
fn item_status_error_maps_401_to_unauthorized() {
    assert_eq!(item_status_error(401, ""), ApiError::Unauthorized);
    assert_eq!(
        item_status_error(503, r#"{"message":"maintenance"}"#),
        ApiError::Status { status: 503, message: "maintenance".to_owned() }
    );
}

#[test]
fn login_status_error_keeps_401_as_credential_message() {
    let err = login_status_error(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err.to_string(), "Invalid credentials");
}

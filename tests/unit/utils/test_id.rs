use auth_portal_client::utils::id::request_id;

#[test]
fn test_request_id_format() {
    let id = request_id();
    assert_eq!(id.len(), 21);
    assert!(
        id.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_request_ids_differ() {
    assert_ne!(request_id(), request_id());
}

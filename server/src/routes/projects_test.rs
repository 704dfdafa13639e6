use super::*;

#[test]
fn project_error_to_status_maps_variants() {
    assert_eq!(project_error_to_status(ProjectError::InvalidName), StatusCode::BAD_REQUEST);
    assert_eq!(project_error_to_status(ProjectError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(
        project_error_to_status(ProjectError::Database(sqlx::Error::PoolClosed)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn document_error_to_status_maps_variants() {
    assert_eq!(document_error_to_status(DocumentError::InvalidName), StatusCode::BAD_REQUEST);
    assert_eq!(document_error_to_status(DocumentError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(
        document_error_to_status(DocumentError::Database(sqlx::Error::PoolClosed)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn create_document_body_accepts_missing_optional_fields() {
    let body: CreateDocumentBody = serde_json::from_str(r#"{"name":"Notes"}"#).unwrap();
    assert_eq!(body.name, "Notes");
    assert!(body.content.is_none());
    assert!(body.encrypted_content.is_none());
}

#[test]
fn create_document_body_ignores_client_supplied_creator() {
    // `created_by` is taken from the session; an extra field is simply dropped.
    let body: CreateDocumentBody =
        serde_json::from_str(r#"{"name":"Notes","created_by":"00000000-0000-0000-0000-000000000001"}"#).unwrap();
    assert_eq!(body.name, "Notes");
}

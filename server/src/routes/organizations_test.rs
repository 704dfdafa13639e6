use super::*;

#[test]
fn invalid_input_maps_to_bad_request() {
    assert_eq!(organization_error_to_status(OrganizationError::InvalidName), StatusCode::BAD_REQUEST);
    assert_eq!(
        organization_error_to_status(OrganizationError::InvalidRole("root".into())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn missing_rows_map_to_not_found() {
    assert_eq!(organization_error_to_status(OrganizationError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(
        organization_error_to_status(OrganizationError::UserNotFound("a@b.c".into())),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn role_and_duplicate_errors_map_to_403_and_409() {
    assert_eq!(organization_error_to_status(OrganizationError::Forbidden(Uuid::nil())), StatusCode::FORBIDDEN);
    assert_eq!(organization_error_to_status(OrganizationError::AlreadyMember), StatusCode::CONFLICT);
}

#[test]
fn database_errors_map_to_500() {
    assert_eq!(
        organization_error_to_status(OrganizationError::Database(sqlx::Error::PoolTimedOut)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

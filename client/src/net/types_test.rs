use super::*;

#[test]
fn user_display_name_prefers_full_name() {
    let user = User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        role: "user".to_owned(),
    };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn user_display_name_falls_back_to_email() {
    let mut user = User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        full_name: None,
        role: "user".to_owned(),
    };
    assert_eq!(user.display_name(), "ada@example.com");
    user.full_name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "ada@example.com");
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u1","email":"a@b.c"}"#).unwrap();
    assert_eq!(user.full_name, None);
    assert_eq!(user.role, "user");
}

#[test]
fn project_deserializes_server_row() {
    let json = r#"{
        "id": "p1",
        "organization_id": "o1",
        "name": "Site",
        "description": null,
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.name, "Site");
    assert_eq!(project.description, None);
    assert_eq!(project.status, "active");
}

#[test]
fn organization_settings_default_to_null() {
    let org: Organization = serde_json::from_str(r#"{"id":"o1","name":"Acme"}"#).unwrap();
    assert!(org.settings.is_null());
}

#[test]
fn sign_up_request_omits_absent_full_name() {
    let req = SignUpRequest { email: "a@b.c".to_owned(), password: "secret1".to_owned(), full_name: None };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("full_name").is_none());
}

#[test]
fn new_project_serializes_null_description() {
    let body = NewProject { name: "Site".to_owned(), description: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "name": "Site", "description": null }));
}

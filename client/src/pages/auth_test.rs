use super::*;

#[test]
fn mode_toggles_between_sign_in_and_sign_up() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
    assert_eq!(AuthMode::default(), AuthMode::SignIn);
}

#[test]
fn validate_requires_both_fields() {
    assert!(validate_credentials(AuthMode::SignIn, "", "secret").is_err());
    assert!(validate_credentials(AuthMode::SignIn, "a@b.co", "").is_err());
    assert!(validate_credentials(AuthMode::SignIn, "   ", "secret").is_err());
}

#[test]
fn validate_requires_at_sign() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "alice", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn sign_up_enforces_password_length() {
    assert!(validate_credentials(AuthMode::SignUp, "a@b.co", "12345").is_err());
    assert!(validate_credentials(AuthMode::SignUp, "a@b.co", "123456").is_ok());
}

#[test]
fn sign_in_does_not_enforce_password_length() {
    assert!(validate_credentials(AuthMode::SignIn, "a@b.co", "123").is_ok());
}

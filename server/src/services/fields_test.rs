use super::*;

#[test]
fn normalize_name_trims() {
    assert_eq!(normalize_name("  Acme  "), Some("Acme".to_owned()));
}

#[test]
fn normalize_name_rejects_blank() {
    assert_eq!(normalize_name(""), None);
    assert_eq!(normalize_name(" \t\n "), None);
}

#[test]
fn normalize_name_rejects_overlong() {
    let long = "a".repeat(MAX_NAME_LEN + 1);
    assert_eq!(normalize_name(&long), None);
    let max = "a".repeat(MAX_NAME_LEN);
    assert_eq!(normalize_name(&max), Some(max.clone()));
}

#[test]
fn optional_text_blank_is_none() {
    assert_eq!(optional_text(None), None);
    assert_eq!(optional_text(Some("")), None);
    assert_eq!(optional_text(Some("   ")), None);
}

#[test]
fn optional_text_keeps_content_verbatim() {
    assert_eq!(optional_text(Some("  v1\n")), Some("  v1\n".to_owned()));
}

#[test]
fn optional_trimmed_strips_padding() {
    assert_eq!(optional_trimmed(Some("  v1  ")), Some("v1".to_owned()));
    assert_eq!(optional_trimmed(Some(" \t ")), None);
    assert_eq!(optional_trimmed(None), None);
}

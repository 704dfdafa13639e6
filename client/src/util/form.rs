//! Form value normalization for the creation modals.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trimmed name, or `None` when the input is empty or whitespace-only.
pub fn submitted_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Optional free text: blank input is sent as `null`, anything else as-is.
/// Used for document bodies, where leading whitespace is content.
pub fn optional_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw.to_owned()) }
}

/// Optional short text such as a project description: trimmed, blank is `null`.
pub fn optional_trimmed(raw: &str) -> Option<String> {
    submitted_name(raw)
}

/// Run `on_create` with the trimmed name if it is non-blank.
///
/// Returns whether the callback was invoked.
pub fn submit_with<F>(raw_name: &str, on_create: F) -> bool
where
    F: FnOnce(String),
{
    match submitted_name(raw_name) {
        Some(name) => {
            on_create(name);
            true
        }
        None => false,
    }
}

//! Input normalization shared by the table services.

pub const MAX_NAME_LEN: usize = 200;

/// Trim a required name. Blank names are rejected; long names are rejected
/// rather than silently truncated.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Map blank optional text (document bodies, ciphertext) to `None`.
/// Non-blank text is kept verbatim.
#[must_use]
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}

/// Trimmed optional short text (project descriptions); blank becomes `None`.
#[must_use]
pub fn optional_trimmed(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;

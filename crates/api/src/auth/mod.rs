//! Session-token generation and identity normalization for the login flow.

pub mod token;

/// Normalize an email for lookup and storage: trimmed and lower-cased.
///
/// Login and profile update both go through this, so "  Foo@Bar.com " and
/// "foo@bar.com" resolve to the same caregiver.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

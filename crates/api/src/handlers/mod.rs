pub mod account;
pub mod auth;
pub mod cards;
pub mod caregivers;
pub mod categories;
pub mod children;
pub mod dashboard;
pub mod settings;

/// Collapse an optional form field to `None` when blank after trimming.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

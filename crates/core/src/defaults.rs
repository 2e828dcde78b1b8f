//! Fixed starter-category policy for the card management screen.
//!
//! Every caregiver receives the same five categories on their first visit to
//! the card landing screen. The list is intentionally hardcoded: names,
//! colors, and order are product decisions, not a configuration surface.

/// Default categories seeded per caregiver, in creation order.
pub const DEFAULT_CATEGORIES: [(&str, &str); 5] = [
    ("Como está o dia", "#B7E0F2"),
    ("Rotina", "#BEE3F8"),
    ("O que estou fazendo", "#BFE6F2"),
    ("Como estou me sentindo", "#FAD4D8"),
    ("Quero / Preciso", "#E6F3C5"),
];

/// Placeholder emoji for cards created without one.
pub const DEFAULT_CARD_EMOJI: &str = "🧩";

/// Fallback card color when neither the request nor the owning category
/// supplies one.
pub const FALLBACK_CARD_COLOR: &str = "#cfeeff";

/// Landing-screen emoji shown next to a default category, keyed by its name.
///
/// Returns `None` for caregiver-created categories.
pub fn default_category_emoji(name: &str) -> Option<&'static str> {
    match name {
        "Como está o dia" => Some("☀️"),
        "Rotina" => Some("🕒"),
        "O que estou fazendo" => Some("🧩"),
        "Como estou me sentindo" => Some("❤️"),
        "Quero / Preciso" => Some("🙋"),
        _ => None,
    }
}

//! Event-type presentation styles.
//!
//! # Responsibility
//! - Map an event category to the icon and colors the host UI renders.
//!
//! # Invariants
//! - Every category resolves to a style; unknown ones use the meeting style.

use monthcal_core::EventType;

/// Icon name plus `#RRGGBB` colors for one event category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStyle {
    /// Host icon identifier (e.g. `users`).
    pub icon: String,
    /// Solid badge color.
    pub accent: String,
    /// Foreground text color.
    pub text: String,
    /// Light card background.
    pub background: String,
}

/// Category to style lookup.
pub trait EventStyleLookup {
    fn style_for(&self, kind: &EventType) -> EventStyle;
}

/// Built-in palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEventStyles;

impl EventStyleLookup for DefaultEventStyles {
    fn style_for(&self, kind: &EventType) -> EventStyle {
        let (icon, accent, text, background) = match kind.display_type() {
            EventType::Review => ("settings", "#22C55E", "#16A34A", "#F0FDF4"),
            EventType::Presentation => ("presentation", "#A855F7", "#9333EA", "#FAF5FF"),
            EventType::Planning => ("briefcase", "#F97316", "#EA580C", "#FFF7ED"),
            EventType::Workshop => ("settings", "#EC4899", "#DB2777", "#FDF2F8"),
            EventType::Demo => ("video", "#EF4444", "#DC2626", "#FEF2F2"),
            EventType::Personal => ("coffee", "#6366F1", "#4F46E5", "#EEF2FF"),
            EventType::Meeting | EventType::Other(_) => {
                ("users", "#3B82F6", "#2563EB", "#EFF6FF")
            }
        };

        EventStyle {
            icon: icon.to_string(),
            accent: accent.to_string(),
            text: text.to_string(),
            background: background.to_string(),
        }
    }
}

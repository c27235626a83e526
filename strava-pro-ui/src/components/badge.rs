//! Badge Component
//!
//! Small pill conveying a qualitative status.

use leptos::*;

use crate::utils::cn;

const BADGE_BASE: &str =
    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold";

/// Badge color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    #[default]
    Default,
    /// Tinted with the brand color
    Accent,
    Warning,
}

impl BadgeStyle {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeStyle::Default => "bg-gray-100 text-gray-800",
            BadgeStyle::Accent => "bg-primary/15 text-primary",
            BadgeStyle::Warning => "bg-yellow-200 text-yellow-800",
        }
    }
}

/// Full class list for a badge
pub fn badge_class(style: BadgeStyle, extra: &str) -> String {
    cn(&[BADGE_BASE, style.classes(), extra])
}

#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeStyle,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant, &class)>{children()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_styles() {
        assert_eq!(BadgeStyle::default(), BadgeStyle::Default);
        assert_eq!(
            badge_class(BadgeStyle::Accent, "mt-2"),
            format!("{BADGE_BASE} bg-primary/15 text-primary mt-2")
        );
        assert!(badge_class(BadgeStyle::Warning, "").ends_with("bg-yellow-200 text-yellow-800"));
    }
}

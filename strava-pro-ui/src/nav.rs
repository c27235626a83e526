//! Navigation Model
//!
//! The sidebar entries and the rule that decides which one is highlighted.

use crate::utils::cn_if;

pub const DASHBOARD_PATH: &str = "/";
pub const ACTIVITIES_PATH: &str = "/activities";

/// A sidebar navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar entries, in display order
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Dashboard",
        path: DASHBOARD_PATH,
    },
    NavItem {
        label: "Activities",
        path: ACTIVITIES_PATH,
    },
];

const NAV_LINK_BASE: &str = "px-4 py-2 rounded-md text-sm font-medium transition-all";
const NAV_LINK_ACTIVE: &str = "bg-primary text-white shadow-sm";
const NAV_LINK_INACTIVE: &str = "text-gray-700 hover:bg-gray-100";

/// Exact path match. `/activities/1` does not activate `/activities`, and
/// `/` only activates on `/`.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

/// Index of the highlighted entry, if any
pub fn active_index(items: &[NavItem], current_path: &str) -> Option<usize> {
    items.iter().position(|item| is_active(item, current_path))
}

/// Class list for a sidebar link
pub fn nav_link_class(active: bool) -> String {
    cn_if(&[
        (NAV_LINK_BASE, true),
        (NAV_LINK_ACTIVE, active),
        (NAV_LINK_INACTIVE, !active),
    ])
}

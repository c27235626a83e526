//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod badge;
pub mod card;
pub mod layout;
pub mod separator;
pub mod sidebar;

pub use badge::{Badge, BadgeStyle};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use layout::Layout;
pub use separator::Separator;
pub use sidebar::Sidebar;

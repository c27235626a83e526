//! Pages
//!
//! Top-level page components for each route.

pub mod activities;
pub mod dashboard;
pub mod not_found;

pub use activities::Activities;
pub use dashboard::Dashboard;
pub use not_found::NotFound;

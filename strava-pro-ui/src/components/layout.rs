//! Layout Component
//!
//! Page shell: sidebar on the left, routed content on the right.

use leptos::*;
use leptos_router::*;

use crate::components::Sidebar;
use crate::nav::{active_index, NAV_ITEMS};

/// Application shell wrapping every page
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    create_effect(move |_| {
        let path = pathname.get();
        let active = active_index(&NAV_ITEMS, &path).map_or("none", |i| NAV_ITEMS[i].label);
        web_sys::console::debug_1(&format!("route: {} (active: {})", path, active).into());
    });

    view! {
        <div class="flex h-screen bg-gray-50 text-gray-800">
            <Sidebar />

            // Main content area
            <main class="flex-1 p-10 overflow-y-auto">
                {children()}
            </main>
        </div>
    }
}

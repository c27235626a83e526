//! Sidebar Component
//!
//! Brand header and navigation list. The highlighted link follows the
//! router's current pathname.

use leptos::*;
use leptos_router::*;

use crate::components::Separator;
use crate::nav::{is_active, nav_link_class, NavItem, NAV_ITEMS};

/// Sidebar with brand and navigation
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <aside class="w-64 bg-white border-r flex flex-col">
            // Brand
            <div class="p-6">
                <h1 class="text-2xl font-bold text-primary">"Strava Pro"</h1>
                <p class="text-xs text-gray-500 mt-1">"Training Intelligence"</p>
            </div>

            <Separator />

            <nav class="flex flex-col p-4 gap-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! { <NavLink item={*item} pathname=pathname /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(item: NavItem, #[prop(into)] pathname: Signal<String>) -> impl IntoView {
    let active = Signal::derive(move || is_active(&item, &pathname.get()));

    // Plain <a>: the router still intercepts the click. <A> lowercases both
    // paths before comparing, so /Activities would light up "Activities";
    // is_active compares case-sensitively.
    view! {
        <a
            href=item.path
            class=move || nav_link_class(active.get())
            aria-current=move || active.get().then(|| "page".to_string())
        >
            {item.label}
        </a>
    }
}

//! 404 Page

use leptos::*;
use leptos_router::*;

use crate::nav::DASHBOARD_PATH;

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h2 class="text-3xl font-bold mb-2">"Page Not Found"</h2>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=DASHBOARD_PATH
                class="px-6 py-3 bg-primary hover:bg-primary-dark text-white rounded-md font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

//! Activities Page

use leptos::*;

/// Activities page component
#[component]
pub fn Activities() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-8">
            <h2 class="text-3xl font-bold">"Activities"</h2>
            <p class="text-gray-500">"No activities to show yet."</p>
        </div>
    }
}

//! Separator Component

use leptos::*;

/// Horizontal rule spanning its container
#[component]
pub fn Separator() -> impl IntoView {
    view! {
        <div role="separator" aria-orientation="horizontal" class="h-px w-full shrink-0 bg-gray-200" />
    }
}

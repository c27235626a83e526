//! Card Components
//!
//! Bordered container with a header and content region.

use leptos::*;

use crate::utils::cn;

/// Card container
#[component]
pub fn Card(
    /// Extra classes merged after the defaults
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["rounded-lg border border-gray-200 bg-white text-gray-900", class.as_str()])>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["flex flex-col space-y-1.5 p-6", class.as_str()])>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <h3 class=cn(&["text-lg font-semibold leading-none tracking-tight", class.as_str()])>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn(&["p-6 pt-0", class.as_str()])>
            {children()}
        </div>
    }
}

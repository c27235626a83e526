//! App Root Component
//!
//! Router and page shell.

use leptos::*;
use leptos_router::*;

use crate::components::Layout;
use crate::nav::{ACTIVITIES_PATH, DASHBOARD_PATH};
use crate::pages::{Activities, Dashboard, NotFound};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Layout>
                <Routes>
                    <Route path=DASHBOARD_PATH view=Dashboard />
                    <Route path=ACTIVITIES_PATH view=Activities />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </Layout>
        </Router>
    }
}

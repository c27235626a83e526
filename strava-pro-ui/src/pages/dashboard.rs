//! Dashboard Page
//!
//! Weekly summary: mileage, pace and training load.

use leptos::*;

use crate::components::{Badge, BadgeStyle, Card, CardContent, CardHeader, CardTitle};

/// A summary card's content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub badge_text: &'static str,
    pub badge_style: BadgeStyle,
}

/// Cards shown on the dashboard, in display order.
///
/// These are fixed display values; there is no activity data behind them yet.
pub const SUMMARY_CARDS: [MetricCard; 3] = [
    MetricCard {
        title: "Weekly Mileage",
        value: "42.3 mi",
        badge_text: "Up 12%",
        badge_style: BadgeStyle::Accent,
    },
    MetricCard {
        title: "Average Pace",
        value: "7:32 /mi",
        badge_text: "Consistent",
        badge_style: BadgeStyle::Default,
    },
    MetricCard {
        title: "Training Load",
        value: "Moderate",
        badge_text: "Balanced",
        badge_style: BadgeStyle::Warning,
    },
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-8">
            <h2 class="text-3xl font-bold">"Dashboard"</h2>

            // Summary cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SUMMARY_CARDS
                    .iter()
                    .map(|card| view! { <SummaryCard card={*card} /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One summary card
#[component]
fn SummaryCard(card: MetricCard) -> impl IntoView {
    view! {
        <Card class="shadow-sm hover:shadow-md transition">
            <CardHeader>
                <CardTitle>{card.title}</CardTitle>
            </CardHeader>
            <CardContent>
                <p class="text-3xl font-bold text-primary" data-card-value="">{card.value}</p>
                <Badge variant=card.badge_style class="mt-2">{card.badge_text}</Badge>
            </CardContent>
        </Card>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn renders_three_cards_with_fixed_values() {
        mount_to_body(|| view! { <Dashboard /> });

        let values = document()
            .query_selector_all("[data-card-value]")
            .expect("valid selector");
        assert_eq!(values.length(), 3);

        let text: Vec<String> = (0..values.length())
            .filter_map(|i| values.item(i))
            .filter_map(|node| node.text_content())
            .collect();
        assert_eq!(text, vec!["42.3 mi", "7:32 /mi", "Moderate"]);
    }
}

//! 結果画面

use crate::components::dish_card::DishCard;
use leptos::prelude::*;
use nutriscan_common::{messages, MenuAnalysisResult};

#[component]
pub fn ResultsView(result: MenuAnalysisResult) -> impl IntoView {
    let count = result.len();
    let total = messages::total_calories(result.total_calories());

    view! {
        <section class="results">
            <div class="results-header">
                <h2>{messages::RESULTS_TITLE}</h2>
                <p class="text-muted">{messages::items_found(count)}</p>
                <p class="results-total">{total}</p>
            </div>

            <div class="dish-grid">
                {result
                    .items
                    .into_iter()
                    .map(|item| view! { <DishCard item=item /> })
                    .collect_view()}
            </div>

            <div class="disclaimer">
                <strong>{messages::DISCLAIMER_TITLE}</strong>
                " "
                {messages::DISCLAIMER}
            </div>
        </section>
    }
}

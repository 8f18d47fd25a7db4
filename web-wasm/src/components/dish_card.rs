//! 料理カード
//!
//! 料理名・カロリー・評価バッジ・説明・5項目のスコアバー・PFC グラム

use leptos::prelude::*;
use nutriscan_common::{messages, HealthRating, MenuItem};

#[component]
pub fn DishCard(item: MenuItem) -> impl IntoView {
    let rating = item.health_rating;
    let nutrition = item.nutrition.clone();

    view! {
        <article class="dish-card">
            <div class="dish-header">
                <div>
                    <h3 class="dish-name">{item.name.clone()}</h3>
                    <span class="dish-calories">{messages::calories(item.calories)}</span>
                </div>
                <span class=rating_class(rating) title=rating.label()>
                    {rating.as_str()}
                </span>
            </div>

            <p class="dish-description">{item.description.clone()}</p>

            <div class="score-list">
                {nutrition
                    .scores()
                    .into_iter()
                    .map(|(label, score)| {
                        let width = bar_width(score);
                        view! {
                            <div class="score-row">
                                <span class="score-label">{label}</span>
                                <div class="score-bar">
                                    <div class="score-fill" style=format!("width: {:.0}%", width) />
                                </div>
                                <span class="score-value">{format!("{:.0}", width)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="macro-grams">
                <span>{messages::grams("P", nutrition.protein_grams)}</span>
                <span>{messages::grams("C", nutrition.carbs_grams)}</span>
                <span>{messages::grams("F", nutrition.fat_grams)}</span>
            </div>
        </article>
    }
}

/// バー幅（%）。範囲外のスコアは表示時のみ丸める
fn bar_width(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

fn rating_class(rating: HealthRating) -> String {
    format!("rating-badge rating-{}", rating.as_str().to_lowercase())
}

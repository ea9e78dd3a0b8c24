use leptos::prelude::*;
use thaw::*;

use super::state::QueryRunState;
use crate::shared::components::{ResultGrid, ResultTable, SqlViewer};

/// Renders the outcome of the latest query submission.
///
/// Shows nothing at all before the first submission.
#[component]
pub fn ResultsView(#[prop(into)] run: Signal<QueryRunState>) -> impl IntoView {
    let sql = Signal::derive(move || run.with(|r| r.sql.clone()));

    view! {
        <Show when=move || !run.with(|r| r.is_blank())>
            <Card>
                <Show when=move || run.with(|r| r.is_loading())>
                    <p class="results__loading">
                        <Spinner />
                        "Running query..."
                    </p>
                </Show>

                {move || {
                    let error = run.with(|r| r.error.clone());
                    (!error.is_empty())
                        .then(|| view! { <div class="results__error">{format!("❌ {}", error)}</div> })
                }}

                <SqlViewer sql=sql />

                {move || {
                    run.with(|r| r.rows().map(ResultTable::from_rows))
                        .map(|table| view! { <ResultGrid table=table /> })
                }}

                {move || {
                    run.with(|r| r.time_label())
                        .map(|time| view! { <p class="results__time">{format!("⏱ Response Time: {}", time)}</p> })
                }}

                <Show when=move || run.with(|r| r.shows_cached_badge())>
                    <p class="results__time">
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            "cached"
                        </Badge>
                    </p>
                </Show>
            </Card>
        </Show>
    }
}

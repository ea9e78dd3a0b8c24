use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u603_run_query::{HistoryEntry, RunQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Card, Input};

use super::api;
use super::state::{latest_first, submittable};
use crate::shared::config::use_config;

/// Query input with the list of previous queries.
///
/// Submission is delegated to `on_submit`; loading and results belong to
/// the caller.
#[component]
pub fn QueryPanel(
    on_submit: Callback<String>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let api_base = use_config().api_base;
    let query = RwSignal::new(String::new());
    let (history, set_history) = signal(Vec::<HistoryEntry>::new());

    // Load history once on mount
    Effect::new(move || {
        let api_base = api_base.clone();
        spawn_local(async move {
            match api::get_history(&api_base).await {
                Ok(entries) => set_history.set(latest_first(entries)),
                Err(e) => log::warn!("failed to fetch query history: {}", e),
            }
        });
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(text) = submittable(&query.get_untracked()) {
            on_submit.run(text);
        }
    };

    view! {
        <Card attr:data-usecase=RunQuery::full_name()>
            <h2 class="panel__title">{RunQuery::display_name()}</h2>
            <p class="panel__hint">{RunQuery::description()}</p>

            <form class="panel__row" on:submit=on_form_submit>
                <Input
                    value=query
                    placeholder="e.g. \"List all employees in Engineering earning above 70k\""
                />
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Processing..." } else { "Run Query" }}
                </button>
            </form>

            <Show when=move || !history.get().is_empty()>
                <div class="history">
                    <h3>"Previous Queries:"</h3>
                    <ul>
                        {move || {
                            history
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let text = entry.query.clone();
                                    let sql = entry.generated_sql.clone().unwrap_or_default();
                                    let time = entry
                                        .time
                                        .filter(|t| *t > 0.0)
                                        .map(|t| view! { <span class="history__time">{format!("{}s", t)}</span> });
                                    view! {
                                        <li
                                            class="history__item"
                                            title=sql
                                            on:click=move |_| query.set(text.clone())
                                        >
                                            {entry.query}
                                            {time}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </Card>
    }
}

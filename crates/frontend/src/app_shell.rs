//! Application shell
//!
//! Lays out the header and the panels, and owns the query submission: the
//! query panel hands its text up here and `ResultsView` renders the outcome.

use contracts::usecases::u603_run_query::QueryRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::header::Header;
use crate::shared::config::use_config;
use crate::shared::state::{apply, dispatch};
use crate::usecases::u601_connect_database::DatabaseConnector;
use crate::usecases::u602_upload_documents::DocumentUploader;
use crate::usecases::u603_run_query::api;
use crate::usecases::u603_run_query::state::QueryRunState;
use crate::usecases::u603_run_query::{QueryPanel, ResultsView};

#[component]
pub fn AppShell() -> impl IntoView {
    let api_base = StoredValue::new(use_config().api_base);
    let run = RwSignal::new(QueryRunState::default());

    let handle_query = Callback::new(move |query: String| {
        let Some(ticket) = dispatch(run, |s| s.begin()) else {
            return;
        };

        spawn_local(async move {
            let outcome = api::run_query(&api_base.get_value(), QueryRequest { query }).await;
            if let Err(e) = &outcome {
                log::warn!("query {} failed: {}", ticket, e);
            }
            apply(run, |s| s.resolve(ticket, outcome));
        });
    });

    let loading = Signal::derive(move || run.with(|r| r.is_loading()));

    view! {
        <div class="app">
            <Header />
            <DatabaseConnector />
            <DocumentUploader />
            <QueryPanel on_submit=handle_query loading=loading />
            <ResultsView run=run />
        </div>
    }
}

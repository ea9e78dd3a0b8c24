use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_upload_documents::UploadDocuments;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::File;

use super::api;
use super::state::{job_summary, UploadState};
use crate::shared::components::StatusLine;
use crate::shared::config::use_config;
use crate::shared::state::{apply, dispatch, Ticket};

const JOB_POLL_INTERVAL_MS: u32 = 2000;

fn files_from_event(ev: &web_sys::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Follows the ingestion job created by `ticket`'s upload until it settles
/// or a newer upload takes over.
async fn track_job(api_base: String, state: RwSignal<UploadState<File>, LocalStorage>, ticket: Ticket) {
    loop {
        let Some(job_id) = state.with_untracked(|s| {
            s.should_poll(ticket).then(|| s.job_id.clone()).flatten()
        }) else {
            break;
        };

        match api::get_job(&api_base, &job_id).await {
            Ok(job) => apply(state, |s| s.job_updated(ticket, job)),
            Err(e) => {
                log::warn!("ingestion job {} status failed: {}", job_id, e);
                break;
            }
        }

        if !state.with_untracked(|s| s.should_poll(ticket)) {
            break;
        }
        TimeoutFuture::new(JOB_POLL_INTERVAL_MS).await;
    }
}

#[component]
pub fn DocumentUploader() -> impl IntoView {
    let api_base = StoredValue::new(use_config().api_base);
    let state = RwSignal::new_local(UploadState::<File>::default());

    let on_files_change = move |ev: web_sys::Event| {
        let files = files_from_event(&ev);
        apply(state, |s| s.select(files));
    };

    let on_upload = move |_| {
        let Some(Some(ticket)) = dispatch(state, |s| s.begin()) else {
            return;
        };
        let files = state.with_untracked(|s| s.files.clone());

        spawn_local(async move {
            let base = api_base.get_value();
            let outcome = api::upload_documents(&base, &files).await;
            if let Err(e) = &outcome {
                log::warn!("document upload {} failed: {}", ticket, e);
            }
            apply(state, |s| s.resolve(ticket, outcome));
            track_job(base, state, ticket).await;
        });
    };

    let uploading = Signal::derive(move || state.with(|s| s.is_uploading()));

    view! {
        <Card attr:data-usecase=UploadDocuments::full_name()>
            <h2 class="panel__title">{UploadDocuments::display_name()}</h2>
            <p class="panel__hint">{UploadDocuments::description()}</p>

            <div class="panel__row">
                <input type="file" multiple on:change=on_files_change />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=uploading
                >
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            </div>

            <StatusLine
                text=Signal::derive(move || state.with(|s| s.status_text()))
                tone=Signal::derive(move || state.with(|s| s.tone()))
            />

            {move || {
                state.with(|s| {
                    let job_id = s.job_id.clone()?;
                    let job = s.job.clone()?;
                    let summary = job_summary(&job_id, &job);
                    Some(view! {
                        <div class="job">
                            <div>{summary}</div>
                            <ul>
                                {job
                                    .errors
                                    .into_iter()
                                    .map(|e| view! { <li>{format!("⚠️ {}: {}", e.file, e.error)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                })
            }}

            {move || {
                let names = state.with(|s| s.file_names());
                (!names.is_empty()).then(|| {
                    view! {
                        <div class="file-list">
                            <h4>"Selected Files:"</h4>
                            <ul>
                                {names
                                    .into_iter()
                                    .map(|name| view! { <li>{format!("📄 {}", name)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
            }}
        </Card>
    }
}

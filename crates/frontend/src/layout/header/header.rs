use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::config::use_config;
use crate::system::health::api;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BackendHealth {
    Checking,
    Online,
    Offline,
}

#[component]
pub fn Header() -> impl IntoView {
    let api_base = use_config().api_base;
    let (health, set_health) = signal(BackendHealth::Checking);
    let (health_note, set_health_note) = signal(String::new());

    Effect::new(move || {
        let api_base = api_base.clone();
        spawn_local(async move {
            match api::ping(&api_base).await {
                Ok(resp) => {
                    set_health_note.set(resp.message.unwrap_or_default());
                    set_health.set(BackendHealth::Online);
                }
                Err(e) => {
                    log::warn!("backend health check failed: {}", e);
                    set_health_note.set(e.to_string());
                    set_health.set(BackendHealth::Offline);
                }
            }
        });
    });

    view! {
        <header class="header">
            <span class="header__title">"AI Query Engine"</span>
            <div class="header__actions">
                <span class="header__subtitle">"Powered by FastAPI + Leptos"</span>
                <span title=move || health_note.get()>
                    {move || match health.get() {
                        BackendHealth::Checking => view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"checking"</Badge>
                        }.into_any(),
                        BackendHealth::Online => view! {
                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Success>"online"</Badge>
                        }.into_any(),
                        BackendHealth::Offline => view! {
                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>"offline"</Badge>
                        }.into_any(),
                    }}
                </span>
            </div>
        </header>
    }
}

use crate::app_shell::AppShell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("query engine frontend, backend at {}", config.api_base);

    // Every panel reads the backend origin from here
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}

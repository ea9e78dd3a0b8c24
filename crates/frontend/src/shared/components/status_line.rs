use leptos::prelude::*;

/// Colour of a panel status message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn class(self) -> &'static str {
        match self {
            StatusTone::Neutral => "status status--neutral",
            StatusTone::Success => "status status--success",
            StatusTone::Error => "status status--error",
        }
    }
}

/// One-line status under a panel's controls. Renders nothing while empty.
#[component]
pub fn StatusLine(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] tone: Signal<StatusTone>,
) -> impl IntoView {
    view! {
        <Show when=move || !text.get().is_empty()>
            <p class=move || tone.get().class()>{move || text.get()}</p>
        </Show>
    }
}

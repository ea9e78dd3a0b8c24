use leptos::prelude::*;
use thaw::*;

use crate::shared::clipboard::copy_to_clipboard_with_callback;

/// Generated SQL, shown verbatim in a fixed-width block.
#[component]
pub fn SqlViewer(
    /// SQL text; the block is hidden while empty
    #[prop(into)]
    sql: Signal<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    // A new statement resets the copy marker
    Effect::new(move || {
        sql.track();
        set_copied.set(false);
    });

    view! {
        <Show when=move || !sql.get().is_empty()>
            <div class="sql-viewer">
                <Flex vertical=false gap=FlexGap::Large justify=FlexJustify::SpaceBetween>
                    <strong>"Generated SQL:"</strong>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            copy_to_clipboard_with_callback(&sql.get_untracked(), move || {
                                set_copied.set(true)
                            });
                        }
                    >
                        {move || if copied.get() { "✔ Copied" } else { "📋 Copy" }}
                    </Button>
                </Flex>
                <pre>{move || sql.get()}</pre>
            </div>
        </Show>
    }
}

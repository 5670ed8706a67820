//! Top bar with the app title, help button, and theme toggle.

use leptos::prelude::*;

use crate::app::Commands;
use crate::state::conversation::ConversationModel;
use crate::state::ui::UiState;
use crate::util::theme::Theme;

/// Header toolbar for the chat page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let model = expect_context::<RwSignal<ConversationModel>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let commands = expect_context::<Commands>();

    let busy = move || model.with(|m| m.state.is_loading());
    let theme_label = move || match ui.with(|u| u.theme) {
        Theme::Light => "\u{1F319}",
        Theme::Dark => "\u{2600}\u{FE0F}",
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"NetBot"</span>
            <span class="toolbar__subtitle">"Network diagnostics assistant"</span>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__help"
                title="Show available commands"
                disabled=busy
                on:click=move |_| commands.request_help()
            >
                "Help"
            </button>
            <button
                class="btn toolbar__theme"
                title="Toggle theme (Ctrl+D)"
                on:click=move |_| commands.toggle_theme()
            >
                {theme_label}
            </button>
        </div>
    }
}

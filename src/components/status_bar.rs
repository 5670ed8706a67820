//! Status line: request phase and backend connectivity.

use leptos::prelude::*;

use crate::state::conversation::{ConversationModel, Phase};

/// Shows "Ready" / "Processing..." / an error label, plus Connected/Offline.
#[component]
pub fn StatusBar() -> impl IntoView {
    let model = expect_context::<RwSignal<ConversationModel>>();

    let phase_class = move || match model.with(|m| m.state.phase()) {
        Phase::Ready => "status-bar__dot status-bar__dot--ready",
        Phase::Loading => "status-bar__dot status-bar__dot--loading",
        Phase::Error => "status-bar__dot status-bar__dot--error",
    };
    let status_label = move || model.with(|m| m.state.status_label());

    let connection_class = move || {
        if model.with(|m| m.state.connected()) {
            "status-bar__connection status-bar__connection--online"
        } else {
            "status-bar__connection status-bar__connection--offline"
        }
    };
    let connection_label = move || model.with(|m| m.state.connection_label());

    view! {
        <div class="status-bar">
            <span class="status-bar__phase">
                <span class=phase_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class=connection_class>{connection_label}</span>
        </div>
    }
}

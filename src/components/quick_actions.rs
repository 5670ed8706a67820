//! Canned diagnostic commands shown as one-click buttons above the input.

#[cfg(test)]
#[path = "quick_actions_test.rs"]
mod quick_actions_test;

use leptos::prelude::*;

use crate::app::Commands;
use crate::state::conversation::ConversationModel;

/// A preset button: visible label and the command text it submits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub command: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { label: "Scan network", command: "scan network" },
    QuickAction { label: "My IP", command: "what's my IP address?" },
    QuickAction { label: "Gateway", command: "what's my default gateway?" },
    QuickAction { label: "Ping 8.8.8.8", command: "ping 8.8.8.8" },
    QuickAction { label: "Router ports", command: "check ports on 192.168.1.1" },
];

#[component]
pub fn QuickActions() -> impl IntoView {
    let model = expect_context::<RwSignal<ConversationModel>>();
    let commands = expect_context::<Commands>();
    let busy = move || model.with(|m| m.state.is_loading());

    view! {
        <div class="quick-actions">
            {QUICK_ACTIONS
                .iter()
                .map(|action| {
                    let command = action.command;
                    view! {
                        <button
                            class="btn quick-action"
                            title=command
                            disabled=busy
                            on:click=move |_| commands.submit(command.to_owned())
                        >
                            {action.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

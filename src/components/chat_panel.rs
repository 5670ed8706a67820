//! Message list and input row.

use leptos::prelude::*;

use crate::app::Commands;
use crate::components::message_view::MessageView;
use crate::components::quick_actions::QuickActions;
use crate::state::conversation::ConversationModel;
use crate::state::transcript::Message;
use crate::state::ui::UiState;
use crate::util::shortcuts::is_submit_key;

/// Chat panel showing the transcript and an input for sending messages.
///
/// The input is disabled while a request is in flight and refocuses when
/// anything bumps [`UiState::input_focus_seq`].
#[component]
pub fn ChatPanel() -> impl IntoView {
    let model = expect_context::<RwSignal<ConversationModel>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let commands = expect_context::<Commands>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let focus_seq = Memo::new(move |_| ui.with(|u| u.input_focus_seq));

    Effect::new(move || {
        let _ = model.with(|m| m.transcript.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    Effect::new(move || {
        let _ = focus_seq.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let busy = move || model.with(|m| m.state.is_loading());

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || busy() {
            return;
        }
        commands.submit(text);
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !busy() && !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages: Vec<Message> = model.with(|m| m.transcript.all().cloned().collect());
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                "Ask me to scan your network, ping a host, or check open ports."
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <MessageView message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <QuickActions/>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type a command... (Ctrl+K to focus)"
                    node_ref=input_ref
                    disabled=busy
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

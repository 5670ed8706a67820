//! One transcript entry: avatar, formatted text, optional data table, time.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::formatted_text::FormattedText;
use crate::state::transcript::{Message, MessageStatus, PLACEHOLDER_ID, Sender};
use crate::util::clock::time_label;
use crate::util::data_panel::render_payload;
use crate::util::format::format;

/// Renders a message, or the typing indicator for the pending placeholder.
#[component]
pub fn MessageView(message: Message) -> impl IntoView {
    if message.is_placeholder() {
        return view! {
            <div class="message bot-message" id=PLACEHOLDER_ID>
                <Avatar sender=Sender::Bot/>
                <div class="message-content">
                    <div class="message-text">
                        <div class="typing-indicator">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any();
    }

    let base = match message.sender {
        Sender::User => "message user-message",
        Sender::Bot => "message bot-message",
    };
    let class = if message.status == MessageStatus::Error {
        format!("{base} message--error")
    } else {
        base.to_owned()
    };
    let markup = format(&message.text);
    let panel = message.attached_data.as_ref().map(render_payload);
    let time = time_label(message.timestamp);

    view! {
        <div class=class data-action=message.action>
            <Avatar sender=message.sender/>
            <div class="message-content">
                <div class="message-text">
                    <FormattedText markup=markup/>
                    {panel.map(|panel| view! { <DataTable panel=panel/> })}
                </div>
                <div class="message-time">{time}</div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn Avatar(sender: Sender) -> impl IntoView {
    match sender {
        Sender::User => view! {
            <div class="message-avatar">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                    <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path>
                    <circle cx="12" cy="7" r="4"></circle>
                </svg>
            </div>
        }
        .into_any(),
        Sender::Bot => view! {
            <div class="message-avatar">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                    <rect x="3" y="11" width="18" height="10" rx="2"></rect>
                    <circle cx="12" cy="5" r="2"></circle>
                    <path d="M12 7v4"></path>
                </svg>
            </div>
        }
        .into_any(),
    }
}

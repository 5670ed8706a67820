//! The single chat screen.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::status_bar::StatusBar;
use crate::components::toolbar::Toolbar;

/// Toolbar, conversation, and status line stacked vertically.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <Toolbar/>
            <ChatPanel/>
            <StatusBar/>
        </div>
    }
}

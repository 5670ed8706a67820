//! Root application component, shared contexts, and command handlers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::controller::ConversationController;
use crate::controller::monitor::ConnectionMonitor;
use crate::net::api::{Backend, HttpBackend};
use crate::pages::chat::ChatPage;
use crate::state::conversation::ConversationModel;
use crate::state::ui::UiState;
use crate::util::theme;

/// The three user commands, registered once and shared through context.
///
/// Components dispatch into these instead of holding the controller.
#[derive(Clone, Copy)]
pub struct Commands {
    pub submit: Callback<String>,
    pub request_help: Callback<()>,
    pub toggle_theme: Callback<()>,
}

impl Commands {
    pub fn new<B>(
        controller: ConversationController<B, RwSignal<ConversationModel>>,
        ui: RwSignal<UiState>,
    ) -> Self
    where
        B: Backend + Clone + Send + Sync + 'static,
    {
        let submit_controller = controller.clone();
        let submit = Callback::new(move |text: String| {
            let controller = submit_controller.clone();
            leptos::task::spawn_local(async move {
                controller.submit(&text).await;
                ui.update(UiState::request_input_focus);
            });
        });

        let request_help = Callback::new(move |()| {
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                controller.request_help().await;
            });
        });

        let toggle_theme = Callback::new(move |()| {
            ui.update(|u| u.theme = theme::toggle(u.theme));
        });

        Self { submit, request_help, toggle_theme }
    }

    pub fn submit(&self, text: String) {
        self.submit.run(text);
    }

    pub fn request_help(&self) {
        self.request_help.run(());
    }

    pub fn toggle_theme(&self) {
        self.toggle_theme.run(());
    }
}

/// Initial UI state with the persisted theme applied to the document.
pub fn initial_ui_state() -> UiState {
    let theme = theme::get_theme();
    theme::apply(theme);
    UiState { theme, ..UiState::default() }
}

/// Root application component.
///
/// Provides the conversation model, UI state and commands, starts the
/// connection monitor, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    let model = RwSignal::new(ConversationModel::default());
    let ui = RwSignal::new(initial_ui_state());

    let backend = HttpBackend::new(config.clone());
    let controller = ConversationController::new(backend.clone(), model);
    let monitor = ConnectionMonitor::new(backend, model);
    let commands = Commands::new(controller, ui);

    provide_context(model);
    provide_context(ui);
    provide_context(commands);

    #[cfg(feature = "csr")]
    {
        monitor.clone().spawn_periodic(config.probe_interval);
        install_page_listeners(monitor, commands, ui);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (monitor, config);
    }

    view! {
        <Title text="NetBot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}

/// Re-probe when the tab becomes visible again and wire global shortcuts.
#[cfg(feature = "csr")]
fn install_page_listeners<B>(
    monitor: ConnectionMonitor<B, RwSignal<ConversationModel>>,
    commands: Commands,
    ui: RwSignal<UiState>,
) where
    B: Backend + Clone + Send + Sync + 'static,
{
    use crate::util::shortcuts::{Shortcut, shortcut_for};

    let visibility = window_event_listener_untyped("visibilitychange", move |_| {
        if !document().hidden() {
            monitor.spawn_probe();
        }
    });

    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        match shortcut_for(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            Some(Shortcut::FocusInput) => {
                ev.prevent_default();
                ui.update(UiState::request_input_focus);
            }
            Some(Shortcut::ToggleTheme) => {
                ev.prevent_default();
                commands.toggle_theme();
            }
            None => {}
        }
    });

    on_cleanup(move || {
        visibility.remove();
        keys.remove();
    });
}

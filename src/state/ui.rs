//! Local UI chrome state (theme, input focus requests).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the conversation model so the
//! controller never has to know about focus or theming.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Bumped whenever something asks for the message input to take focus.
    pub input_focus_seq: u64,
}

impl UiState {
    /// Ask the message input to (re)focus.
    pub fn request_input_focus(&mut self) {
        self.input_focus_seq = self.input_focus_seq.wrapping_add(1);
    }
}

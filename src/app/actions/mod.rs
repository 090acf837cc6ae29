//! Action handlers for user input
//!
//! - `generate`: Reply generation, confirmation and draft reset
//! - `input`: Text input handling and manual key entry

mod generate;
mod input;

use crate::input::Action;

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action, render_thread: &RenderThread) {
        match action {
            Action::NextField => self.state.focus_next(),
            Action::PrevField => self.state.focus_prev(),
            Action::NextTone => self.state.tone = self.state.tone.next(),
            Action::PrevTone => self.state.tone = self.state.tone.prev(),
            Action::Generate => self.generate(render_thread).await,
            Action::Confirm => self.confirm_draft(),
            Action::ResetDraft => self.reset_draft(),
            Action::ClearEmail => {
                self.state.email_input.clear();
                self.state.status.set_message("Email cleared");
            }
            Action::SubmitKey => self.submit_manual_key(),
            Action::Quit => {} // Handled in event loop
        }
    }
}

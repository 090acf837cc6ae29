//! Reply generation action handlers

use crate::app::state::Focus;
use crate::session::{EmailRequest, GenerateError};

use super::super::App;
use super::super::render_thread::RenderThread;

impl App {
    /// Run one generate action against the session.
    ///
    /// Blocks the event loop until the provider answers; a busy frame is
    /// rendered first so the user sees the request is pending.
    pub(crate) async fn generate(&mut self, render_thread: &RenderThread) {
        self.state.status.clear_error();
        self.state.status.loading = true;
        self.state
            .status
            .set_message(format!("Consulting {}...", self.state.model));
        render_thread.render(self.state.clone());

        let request = EmailRequest::new(self.state.email_input.clone(), self.state.tone);
        let outcome = self
            .session
            .generate(&self.client, &request)
            .await
            .map(|result| result.clone());

        self.state.status.loading = false;

        match outcome {
            Ok(result) => {
                self.state.status.set_message(format!(
                    "Intent: {}  Tone: {}",
                    result.intent, result.tone
                ));
                self.state.show_result(result);
                self.state.focus = Focus::Draft;
            }
            Err(e) => self.show_generate_error(e),
        }
    }

    pub(super) fn show_generate_error(&mut self, error: GenerateError) {
        self.state.status.set_message("");

        self.state.raw_output = error.raw_output().map(str::to_string);

        if matches!(error, GenerateError::MissingCredential) {
            self.state.focus = Focus::ApiKey;
        }

        if error.is_warning() {
            self.state.status.set_warning(&error);
        } else {
            self.state.status.set_error(&error);
        }
    }

    /// Local-only acknowledgment; nothing leaves the terminal
    pub(crate) fn confirm_draft(&mut self) {
        if !self.session.has_result() {
            self.state.status.set_warning("Generate a reply first.");
            return;
        }
        self.state
            .status
            .show_toast("Ready to copy! Select the draft and copy it from your terminal.");
    }

    /// Throw away local edits and show the generated reply again
    pub(crate) fn reset_draft(&mut self) {
        if let Some(result) = self.session.result() {
            self.state.draft = result.reply.clone();
            self.state.status.set_message("Draft restored");
        }
    }
}

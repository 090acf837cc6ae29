//! Display state snapshot shared with the render thread

use std::time::Instant;

use crate::ai::Tone;
use crate::constants::{ERROR_TTL_SECS, TOAST_TTL_SECS};
use crate::credentials::CredentialSource;
use crate::session::SessionResult;

/// Which input currently receives keystrokes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Manual API key entry (only offered when no key was resolved)
    ApiKey,
    #[default]
    Email,
    Tone,
    /// Editable reply draft (only offered once a result exists)
    Draft,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    /// A completion request is in flight
    pub loading: bool,
    pub error: Option<String>,
    pub error_time: Option<Instant>,
    /// The current error is a validation warning
    pub warning: bool,
    pub message: String,
    pub toast: Option<String>,
    pub toast_time: Option<Instant>,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(Instant::now());
        self.warning = false;
    }

    pub fn set_warning(&mut self, warning: impl ToString) {
        self.set_error(warning);
        self.warning = true;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
        self.warning = false;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }

    pub fn show_toast(&mut self, msg: impl ToString) {
        self.toast = Some(msg.to_string());
        self.toast_time = Some(Instant::now());
    }

    pub fn clear_toast_if_expired(&mut self) -> bool {
        if let Some(time) = self.toast_time
            && time.elapsed().as_secs() >= TOAST_TTL_SECS
        {
            self.toast = None;
            self.toast_time = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Pasted email, kept exactly as entered
    pub email_input: String,
    pub tone: Tone,
    /// Manual key being typed; rendered masked
    pub api_key_input: String,
    pub credential: Option<CredentialSource>,
    pub model: String,
    /// Copy of the session's last result for display
    pub result: Option<SessionResult>,
    /// User-editable copy of the reply; never written back to the session
    pub draft: String,
    /// Raw model output from the last decode failure
    pub raw_output: Option<String>,
    pub status: StatusState,
}

impl AppState {
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Key entry stays open while no stored key exists, so a typed key can be corrected
    pub fn key_entry_open(&self) -> bool {
        matches!(self.credential, None | Some(CredentialSource::Manual))
    }

    /// Focus targets available in the current state, in Tab order
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = Vec::with_capacity(4);
        if self.key_entry_open() {
            order.push(Focus::ApiKey);
        }
        order.push(Focus::Email);
        order.push(Focus::Tone);
        if self.has_result() {
            order.push(Focus::Draft);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    /// Show a freshly generated result; the draft starts as the reply text
    pub fn show_result(&mut self, result: SessionResult) {
        self.draft = result.reply.clone();
        self.result = Some(result);
        self.raw_output = None;
    }

    /// Mutable access to the text field under focus, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::ApiKey => Some(&mut self.api_key_input),
            Focus::Email => Some(&mut self.email_input),
            Focus::Draft => Some(&mut self.draft),
            Focus::Tone => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SessionResult {
        SessionResult {
            intent: "Complaint".to_string(),
            tone: "Formal".to_string(),
            reply: "We are sorry to hear that.".to_string(),
        }
    }

    #[test]
    fn test_focus_order_without_key_or_result() {
        let state = AppState::default();
        assert_eq!(
            state.focus_order(),
            vec![Focus::ApiKey, Focus::Email, Focus::Tone]
        );
    }

    #[test]
    fn test_focus_order_with_key_and_result() {
        let mut state = AppState {
            credential: Some(CredentialSource::Environment),
            ..Default::default()
        };
        state.show_result(sample_result());
        assert_eq!(
            state.focus_order(),
            vec![Focus::Email, Focus::Tone, Focus::Draft]
        );
    }

    #[test]
    fn test_manual_key_keeps_key_entry_reachable() {
        let mut state = AppState {
            credential: Some(CredentialSource::Manual),
            ..Default::default()
        };
        assert!(state.key_entry_open());
        assert_eq!(
            state.focus_order(),
            vec![Focus::ApiKey, Focus::Email, Focus::Tone]
        );
        state.focus_prev();
        assert_eq!(state.focus, Focus::ApiKey);

        state.credential = Some(CredentialSource::SecretsFile);
        assert!(!state.key_entry_open());
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut state = AppState {
            credential: Some(CredentialSource::Keyring),
            ..Default::default()
        };
        state.focus_next();
        assert_eq!(state.focus, Focus::Tone);
        state.focus_next();
        assert_eq!(state.focus, Focus::Email);
        state.focus_prev();
        assert_eq!(state.focus, Focus::Tone);
    }

    #[test]
    fn test_show_result_seeds_draft() {
        let mut state = AppState {
            raw_output: Some("garbage".to_string()),
            ..Default::default()
        };
        state.show_result(sample_result());
        assert_eq!(state.draft, "We are sorry to hear that.");
        assert!(state.raw_output.is_none());
        assert!(state.has_result());
    }

    #[test]
    fn test_draft_edits_do_not_touch_result() {
        let mut state = AppState::default();
        state.show_result(sample_result());
        state.focus = Focus::Draft;
        if let Some(text) = state.focused_text_mut() {
            text.push_str(" Regards.");
        }
        assert_eq!(state.draft, "We are sorry to hear that. Regards.");
        assert_eq!(
            state.result.as_ref().map(|r| r.reply.as_str()),
            Some("We are sorry to hear that.")
        );
    }

    #[test]
    fn test_warning_flag_reset_by_error() {
        let mut status = StatusState::default();
        status.set_warning("Please paste an email to analyze.");
        assert!(status.warning);
        status.set_error("An error occurred");
        assert!(!status.warning);
        status.clear_error();
        assert!(status.error.is_none());
    }
}

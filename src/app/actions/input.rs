//! Text input handling (chars, backspace, paste)

use crate::app::state::Focus;

use super::super::App;

impl App {
    pub(crate) fn handle_char(&mut self, c: char) {
        if let Some(text) = self.state.focused_text_mut() {
            text.push(c);
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        if let Some(text) = self.state.focused_text_mut() {
            text.pop();
        }
    }

    pub(crate) fn handle_paste(&mut self, pasted: &str) {
        let single_line = self.state.focus == Focus::ApiKey;
        if let Some(text) = self.state.focused_text_mut() {
            if single_line {
                text.push_str(pasted.trim());
            } else {
                // Terminals deliver pasted line breaks as CR
                text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
            }
        }
    }

    /// Use the typed key for this session only
    pub(crate) fn submit_manual_key(&mut self) {
        if self.session.set_manual_key(&self.state.api_key_input) {
            self.state.api_key_input.clear();
            self.state.credential = self.session.credential_source();
            self.state.focus = Focus::Email;
            self.state.status.clear_error();
            self.state.status.set_message("API key set for this session");
        } else {
            self.state.status.set_warning("Enter a non-empty API key.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Tone;
    use crate::config::Config;
    use crate::credentials::CredentialSource;
    use crate::session::{GenerateError, Session};

    fn app_without_key() -> App {
        App::new(
            &Config::default(),
            Session::with_credential(None, Tone::AutoDetect),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_char(c);
        }
    }

    #[test]
    fn test_manual_key_can_be_replaced_after_rejection() {
        let mut app = app_without_key();
        assert_eq!(app.state.focus, Focus::ApiKey);

        type_text(&mut app, "gsk_typo");
        app.submit_manual_key();
        assert_eq!(app.state.credential, Some(CredentialSource::Manual));
        assert_eq!(app.state.focus, Focus::Email);
        assert!(app.state.api_key_input.is_empty());

        app.show_generate_error(GenerateError::ProviderFailure(anyhow::anyhow!(
            "Groq API error (401 Unauthorized)"
        )));
        assert!(app.state.focus_order().contains(&Focus::ApiKey));

        app.state.focus_prev();
        assert_eq!(app.state.focus, Focus::ApiKey);
        type_text(&mut app, "gsk_fixed");
        app.submit_manual_key();

        assert_eq!(app.session.credential_source(), Some(CredentialSource::Manual));
        assert!(app.state.api_key_input.is_empty());
        assert!(app.state.status.error.is_none());
    }

    #[test]
    fn test_blank_manual_key_is_rejected() {
        let mut app = app_without_key();
        type_text(&mut app, "   ");
        app.submit_manual_key();
        assert_eq!(app.state.credential, None);
        assert!(app.state.status.warning);
    }

    #[test]
    fn test_paste_normalizes_line_breaks() {
        let mut app = app_without_key();
        app.handle_paste(" gsk_pasted \n");
        assert_eq!(app.state.api_key_input, "gsk_pasted");

        app.state.focus = Focus::Email;
        app.handle_paste("Hello,\r\nThanks\rBye");
        assert_eq!(app.state.email_input, "Hello,\nThanks\nBye");
    }
}

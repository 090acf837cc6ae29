use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::{AppState, Focus};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
    Paste(String),
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key(key_event, state, bindings)
        }
        Event::Paste(text) if state.focus != Focus::Tone => InputResult::Paste(text),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    // Global bindings first
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    match state.focus {
        Focus::Tone => handle_tone_input(key),
        Focus::ApiKey => handle_key_entry_input(key),
        Focus::Email | Focus::Draft => handle_text_input(key),
    }
}

fn handle_tone_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('l') => {
            InputResult::Action(Action::NextTone)
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => InputResult::Action(Action::PrevTone),
        KeyCode::Enter => InputResult::Action(Action::Generate),
        _ => InputResult::Continue,
    }
}

fn handle_key_entry_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char(c) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => InputResult::Action(Action::SubmitKey),
        _ => InputResult::Continue,
    }
}

fn handle_text_input(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char(c) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => InputResult::Char('\n'),
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keybindings::{ctrl_key, key, key_code};

    fn run(key: KeyEvent, state: &AppState) -> InputResult {
        handle_key(key, state, &KeyBindings::new())
    }

    #[test]
    fn test_letters_type_into_email() {
        let state = AppState::default();
        assert!(matches!(run(key('q'), &state), InputResult::Char('q')));
        assert!(matches!(
            run(key_code(KeyCode::Enter), &state),
            InputResult::Char('\n')
        ));
    }

    #[test]
    fn test_ctrl_g_generates_from_any_field() {
        for focus in [Focus::Email, Focus::Tone, Focus::Draft, Focus::ApiKey] {
            let state = AppState {
                focus,
                ..Default::default()
            };
            assert!(matches!(
                run(ctrl_key('g'), &state),
                InputResult::Action(Action::Generate)
            ));
        }
    }

    #[test]
    fn test_tone_focus_arrows() {
        let state = AppState {
            focus: Focus::Tone,
            ..Default::default()
        };
        assert!(matches!(
            run(key_code(KeyCode::Right), &state),
            InputResult::Action(Action::NextTone)
        ));
        assert!(matches!(
            run(key_code(KeyCode::Left), &state),
            InputResult::Action(Action::PrevTone)
        ));
        assert!(matches!(run(key('x'), &state), InputResult::Continue));
    }

    #[test]
    fn test_enter_submits_manual_key() {
        let state = AppState {
            focus: Focus::ApiKey,
            ..Default::default()
        };
        assert!(matches!(
            run(key_code(KeyCode::Enter), &state),
            InputResult::Action(Action::SubmitKey)
        ));
    }

    #[test]
    fn test_paste_ignored_on_tone_selector() {
        let bindings = KeyBindings::new();
        let state = AppState {
            focus: Focus::Tone,
            ..Default::default()
        };
        let result = handle_input(Event::Paste("hello".to_string()), &state, &bindings);
        assert!(matches!(result, InputResult::Continue));

        let state = AppState::default();
        let result = handle_input(Event::Paste("hello".to_string()), &state, &bindings);
        assert!(matches!(result, InputResult::Paste(ref s) if s == "hello"));
    }
}

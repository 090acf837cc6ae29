use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Focus
    NextField,
    PrevField,

    // Tone selector
    NextTone,
    PrevTone,

    // Reply generation
    Generate,
    /// Acknowledge the draft as ready to copy (local only)
    Confirm,
    /// Restore the draft to the generated reply
    ResetDraft,
    ClearEmail,
    /// Submit the manually entered API key
    SubmitKey,

    Quit,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Global bindings; they work from every field, so all use Ctrl
    fn default_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        map.insert(key_code(KeyCode::Tab), Action::NextField);
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(key_code(KeyCode::BackTab), Action::PrevField);

        map.insert(ctrl_key('t'), Action::NextTone);
        map.insert(ctrl_key('g'), Action::Generate);
        map.insert(ctrl_key('y'), Action::Confirm);
        map.insert(ctrl_key('r'), Action::ResetDraft);
        map.insert(ctrl_key('l'), Action::ClearEmail);

        map.insert(ctrl_key('c'), Action::Quit);
        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(key_code(KeyCode::Esc), Action::Quit);

        map
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub(super) fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub(super) fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shift_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get(&ctrl_key('g')), Some(Action::Generate));
        assert_eq!(bindings.get(&ctrl_key('y')), Some(Action::Confirm));
        assert_eq!(bindings.get(&key_code(KeyCode::Tab)), Some(Action::NextField));
        assert_eq!(bindings.get(&ctrl_key('c')), Some(Action::Quit));
    }

    #[test]
    fn test_plain_letters_unbound() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get(&key('g')), None);
        assert_eq!(bindings.get(&key('q')), None);
    }
}

//! Key bindings for the quiz actions a user can trigger directly.
//!
//! The built-in bindings can be overridden per action through the `[keys]`
//! table in the config file, e.g. `nextQuestion = "j"`. Entries are validated
//! at startup: an unrecognized action name, a system action, or a multi-char
//! key spec all abort with a plain error before the terminal enters raw mode.

use crate::app::action::ActionKind;
use crate::app::error::QuizError;
use crossterm::event::KeyCode;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Keymap {
    bindings: HashMap<KeyCode, ActionKind>,
}

impl Keymap {
    fn builtin() -> HashMap<KeyCode, ActionKind> {
        HashMap::from([
            (KeyCode::Char('s'), ActionKind::Start),
            (KeyCode::Char('n'), ActionKind::NextQuestion),
            (KeyCode::Char('f'), ActionKind::Finish),
            (KeyCode::Char('r'), ActionKind::Restart),
        ])
    }

    pub fn from_config(overrides: &HashMap<String, String>) -> Result<Self, QuizError> {
        let mut bindings = Self::builtin();
        for (name, spec) in overrides {
            let kind = ActionKind::from_name(name)?;
            if !kind.bindable() {
                return Err(QuizError::SystemAction(name.clone()));
            }
            let key = parse_key(spec)?;
            // One key per action: drop the binding being replaced.
            bindings.retain(|_, bound| *bound != kind);
            bindings.insert(key, kind);
        }
        Ok(Self { bindings })
    }

    pub fn action_for(&self, key: KeyCode) -> Option<ActionKind> {
        self.bindings.get(&key).copied()
    }

    /// Reverse lookup for the key hints in the status bar.
    pub fn key_for(&self, kind: ActionKind) -> Option<KeyCode> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == kind)
            .map(|(key, _)| *key)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: Self::builtin(),
        }
    }
}

fn parse_key(spec: &str) -> Result<KeyCode, QuizError> {
    let mut chars = spec.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(QuizError::InvalidKey(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.action_for(KeyCode::Char('s')),
            Some(ActionKind::Start)
        );
        assert_eq!(
            keymap.action_for(KeyCode::Char('n')),
            Some(ActionKind::NextQuestion)
        );
        assert_eq!(keymap.action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_override_moves_the_binding() {
        let overrides = HashMap::from([("start".to_string(), "g".to_string())]);
        let keymap = Keymap::from_config(&overrides).unwrap();
        assert_eq!(
            keymap.action_for(KeyCode::Char('g')),
            Some(ActionKind::Start)
        );
        assert_eq!(keymap.action_for(KeyCode::Char('s')), None);
        assert_eq!(keymap.key_for(ActionKind::Start), Some(KeyCode::Char('g')));
    }

    #[test]
    fn test_unknown_action_name_is_fatal() {
        let overrides = HashMap::from([("nextQueston".to_string(), "j".to_string())]);
        let err = Keymap::from_config(&overrides).unwrap_err();
        assert!(matches!(err, QuizError::UnknownAction(_)));
    }

    #[test]
    fn test_system_actions_cannot_be_bound() {
        for name in ["tick", "dataReceived", "error", "newAnswer"] {
            let overrides = HashMap::from([(name.to_string(), "t".to_string())]);
            let err = Keymap::from_config(&overrides).unwrap_err();
            assert!(matches!(err, QuizError::SystemAction(_)), "{name}");
        }
    }

    #[test]
    fn test_key_spec_must_be_a_single_character() {
        for spec in ["", "ab", "enter"] {
            let overrides = HashMap::from([("finish".to_string(), spec.to_string())]);
            let err = Keymap::from_config(&overrides).unwrap_err();
            assert!(matches!(err, QuizError::InvalidKey(_)), "{spec}");
        }
    }
}

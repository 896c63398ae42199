use crate::app::error::QuizError;
use crate::app::state::Question;

/// Everything the quiz state machine can be asked to do. Dispatching actions
/// is the only way quiz state changes; views and collaborators never mutate
/// it directly.
#[derive(Debug, Clone)]
pub enum Action {
    DataReceived(Vec<Question>),
    LoadFailed,
    Start,
    NewAnswer(usize),
    NextQuestion,
    Finish,
    Restart,
    Tick,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::DataReceived(_) => ActionKind::DataReceived,
            Action::LoadFailed => ActionKind::LoadFailed,
            Action::Start => ActionKind::Start,
            Action::NewAnswer(_) => ActionKind::NewAnswer,
            Action::NextQuestion => ActionKind::NextQuestion,
            Action::Finish => ActionKind::Finish,
            Action::Restart => ActionKind::Restart,
            Action::Tick => ActionKind::Tick,
        }
    }
}

/// Discriminant of [`Action`], used where kinds cross a string boundary
/// (the `[keys]` table in the config file, transcript and log lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DataReceived,
    LoadFailed,
    Start,
    NewAnswer,
    NextQuestion,
    Finish,
    Restart,
    Tick,
}

impl ActionKind {
    /// Parse a wire name. The names match the question service's action
    /// vocabulary, including `error` for a failed load.
    pub fn from_name(name: &str) -> Result<Self, QuizError> {
        match name {
            "dataReceived" => Ok(ActionKind::DataReceived),
            "error" => Ok(ActionKind::LoadFailed),
            "start" => Ok(ActionKind::Start),
            "newAnswer" => Ok(ActionKind::NewAnswer),
            "nextQuestion" => Ok(ActionKind::NextQuestion),
            "finish" => Ok(ActionKind::Finish),
            "restart" => Ok(ActionKind::Restart),
            "tick" => Ok(ActionKind::Tick),
            other => Err(QuizError::UnknownAction(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionKind::DataReceived => "dataReceived",
            ActionKind::LoadFailed => "error",
            ActionKind::Start => "start",
            ActionKind::NewAnswer => "newAnswer",
            ActionKind::NextQuestion => "nextQuestion",
            ActionKind::Finish => "finish",
            ActionKind::Restart => "restart",
            ActionKind::Tick => "tick",
        }
    }

    /// Kinds a user may rebind to a key. The rest are emitted by the feed
    /// and the timer, never by a keypress.
    pub fn bindable(self) -> bool {
        matches!(
            self,
            ActionKind::Start | ActionKind::NextQuestion | ActionKind::Finish | ActionKind::Restart
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ActionKind; 8] = [
        ActionKind::DataReceived,
        ActionKind::LoadFailed,
        ActionKind::Start,
        ActionKind::NewAnswer,
        ActionKind::NextQuestion,
        ActionKind::Finish,
        ActionKind::Restart,
        ActionKind::Tick,
    ];

    #[test]
    fn test_wire_names_round_trip() {
        for kind in ALL_KINDS {
            assert_eq!(ActionKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        for bad in ["frobnicate", "Start", "next_question", ""] {
            let err = ActionKind::from_name(bad).unwrap_err();
            assert!(matches!(err, QuizError::UnknownAction(_)), "{bad}");
        }
    }

    #[test]
    fn test_only_user_facing_kinds_are_bindable() {
        let bindable: Vec<_> = ALL_KINDS.iter().filter(|k| k.bindable()).collect();
        assert_eq!(
            bindable,
            [
                &ActionKind::Start,
                &ActionKind::NextQuestion,
                &ActionKind::Finish,
                &ActionKind::Restart
            ]
        );
    }
}

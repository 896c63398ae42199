use crate::app::action::{Action, ActionKind};
use crate::app::event::AppEvent;
use crate::app::state::{AppState, Status};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const NUM_OPTIONS: usize = 4;

/// Translate one event into the quiz actions it implies. The caller
/// dispatches the returned actions in order; view-only state (option cursor,
/// redraw flag, quit flag) is updated here directly.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::QuestionsLoaded(questions) => {
            state.dirty = true;
            vec![Action::DataReceived(questions)]
        }
        AppEvent::FetchFailed(reason) => {
            state.dirty = true;
            state.load_error = Some(reason);
            vec![Action::LoadFailed]
        }
        AppEvent::Tick => {
            // The countdown only runs while a quiz is in progress; ticks
            // arriving in any other status never reach the state machine.
            if state.quiz.status == Status::Active {
                state.dirty = true;
                vec![Action::Tick]
            } else {
                vec![]
            }
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return vec![];
    }
    if key.code == KeyCode::Char('q') {
        state.should_quit = true;
        return vec![];
    }

    match state.quiz.status {
        Status::Loading | Status::Error => vec![],
        Status::Ready => handle_ready_key(state, key),
        Status::Active => handle_active_key(state, key),
        Status::Finished => handle_finished_key(state, key),
    }
}

fn handle_ready_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter || state.keymap.action_for(key.code) == Some(ActionKind::Start) {
        return vec![Action::Start];
    }
    vec![]
}

fn handle_active_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let answered = state.quiz.answer.is_some();
    let on_last = state.quiz.index + 1 >= state.quiz.num_questions();

    match key.code {
        KeyCode::Char(c @ '1'..='4') if !answered => {
            return vec![Action::NewAnswer(c as usize - '1' as usize)];
        }
        KeyCode::Up if !answered => {
            state.selected = state.selected.checked_sub(1).unwrap_or(NUM_OPTIONS - 1);
            return vec![];
        }
        KeyCode::Down if !answered => {
            state.selected = (state.selected + 1) % NUM_OPTIONS;
            return vec![];
        }
        // Enter is contextual: submit the highlighted option, then advance,
        // then finish on the last question.
        KeyCode::Enter if !answered => {
            return vec![Action::NewAnswer(state.selected)];
        }
        KeyCode::Enter if on_last => {
            return vec![Action::Finish];
        }
        KeyCode::Enter => {
            state.selected = 0;
            return vec![Action::NextQuestion];
        }
        _ => {}
    }

    match state.keymap.action_for(key.code) {
        Some(ActionKind::NextQuestion) if answered && !on_last => {
            state.selected = 0;
            vec![Action::NextQuestion]
        }
        Some(ActionKind::Finish) if answered && on_last => vec![Action::Finish],
        _ => vec![],
    }
}

fn handle_finished_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter || state.keymap.action_for(key.code) == Some(ActionKind::Restart)
    {
        state.selected = 0;
        return vec![Action::Restart];
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::Keymap;
    use crate::app::state::Question;
    use crate::config::AppConfig;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                text: "q1".into(),
                options: ["a".into(), "b".into(), "c".into(), "d".into()],
                correct_option: 1,
                points: 10,
            },
            Question {
                text: "q2".into(),
                options: ["a".into(), "b".into(), "c".into(), "d".into()],
                correct_option: 0,
                points: 20,
            },
        ]
    }

    fn active_app() -> AppState {
        let mut state = AppState::new(AppConfig::default(), Keymap::default());
        state.quiz.dispatch(Action::DataReceived(questions()));
        state.quiz.dispatch(Action::Start);
        state
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn kinds(actions: &[Action]) -> Vec<ActionKind> {
        actions.iter().map(Action::kind).collect()
    }

    #[test]
    fn test_ticks_only_reach_an_active_quiz() {
        let mut state = AppState::new(AppConfig::default(), Keymap::default());
        assert!(handle_event(&mut state, AppEvent::Tick).is_empty());

        let mut state = active_app();
        assert_eq!(
            kinds(&handle_event(&mut state, AppEvent::Tick)),
            [ActionKind::Tick]
        );

        state.quiz.dispatch(Action::Finish);
        assert!(handle_event(&mut state, AppEvent::Tick).is_empty());
    }

    #[test]
    fn test_fetch_failure_keeps_the_detail_for_the_error_screen() {
        let mut state = AppState::new(AppConfig::default(), Keymap::default());
        let actions = handle_event(&mut state, AppEvent::FetchFailed("connection refused".into()));
        assert_eq!(kinds(&actions), [ActionKind::LoadFailed]);
        assert_eq!(state.load_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_enter_starts_from_the_start_screen() {
        let mut state = AppState::new(AppConfig::default(), Keymap::default());
        state.quiz.dispatch(Action::DataReceived(questions()));
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(kinds(&actions), [ActionKind::Start]);
    }

    #[test]
    fn test_digit_keys_answer_directly() {
        let mut state = active_app();
        let actions = handle_event(&mut state, press(KeyCode::Char('2')));
        assert!(matches!(actions[..], [Action::NewAnswer(1)]));
    }

    #[test]
    fn test_enter_submits_the_highlighted_option() {
        let mut state = active_app();
        handle_event(&mut state, press(KeyCode::Down));
        handle_event(&mut state, press(KeyCode::Down));
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert!(matches!(actions[..], [Action::NewAnswer(2)]));
    }

    #[test]
    fn test_option_cursor_wraps() {
        let mut state = active_app();
        handle_event(&mut state, press(KeyCode::Up));
        assert_eq!(state.selected, 3);
        handle_event(&mut state, press(KeyCode::Down));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_enter_advances_only_after_an_answer() {
        let mut state = active_app();
        state.quiz.dispatch(Action::NewAnswer(1));
        state.selected = 2;
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(kinds(&actions), [ActionKind::NextQuestion]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_enter_finishes_on_the_last_question() {
        let mut state = active_app();
        state.quiz.dispatch(Action::NewAnswer(1));
        state.quiz.dispatch(Action::NextQuestion);
        state.quiz.dispatch(Action::NewAnswer(0));
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(kinds(&actions), [ActionKind::Finish]);
    }

    #[test]
    fn test_bound_keys_respect_the_answered_guard() {
        let mut state = active_app();
        // Not answered yet: neither next nor finish fire.
        assert!(handle_event(&mut state, press(KeyCode::Char('n'))).is_empty());
        assert!(handle_event(&mut state, press(KeyCode::Char('f'))).is_empty());

        state.quiz.dispatch(Action::NewAnswer(1));
        // Answered but not on the last question: finish still refuses.
        assert!(handle_event(&mut state, press(KeyCode::Char('f'))).is_empty());
        let actions = handle_event(&mut state, press(KeyCode::Char('n')));
        assert_eq!(kinds(&actions), [ActionKind::NextQuestion]);
    }

    #[test]
    fn test_restart_from_the_results_screen() {
        let mut state = active_app();
        state.quiz.dispatch(Action::Finish);
        let actions = handle_event(&mut state, press(KeyCode::Char('r')));
        assert_eq!(kinds(&actions), [ActionKind::Restart]);
    }

    #[test]
    fn test_q_requests_quit_everywhere() {
        for build in [AppState::new(AppConfig::default(), Keymap::default()), active_app()] {
            let mut state = build;
            assert!(handle_event(&mut state, press(KeyCode::Char('q'))).is_empty());
            assert!(state.should_quit);
        }
    }
}

use crate::app::action::Action;
use crate::app::keymap::Keymap;
use crate::config::AppConfig;
use serde::Deserialize;
use tracing::warn;

/// A single trivia question as served by the feed.
///
/// The wire form is `{ "question": …, "options": […], "correctOption": …,
/// "points": … }`; a payload with anything other than four options fails to
/// decode and surfaces as a load error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; 4],
    pub correct_option: usize,
    pub points: u32,
}

/// Where the quiz currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Error,
    Ready,
    Active,
    Finished,
}

/// The quiz state machine. All fields are mutated exclusively through
/// [`QuizState::dispatch`]; views read an immutable snapshot.
#[derive(Debug)]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub status: Status,
    pub index: usize,
    pub answer: Option<usize>,
    pub points: u32,
    pub high_score: u32,
    pub seconds_remaining: u64,
    secs_per_question: u64,
}

impl QuizState {
    pub fn new(secs_per_question: u64) -> Self {
        Self {
            questions: Vec::new(),
            status: Status::Loading,
            index: 0,
            answer: None,
            points: 0,
            high_score: 0,
            seconds_remaining: 0,
            secs_per_question,
        }
    }

    /// Apply one action. Total over every `(status, action)` pair: pairs
    /// outside the transition table leave the state untouched, so a stray
    /// tick after the quiz finished (or any other late event) is harmless.
    pub fn dispatch(&mut self, action: Action) {
        match (self.status, action) {
            (Status::Loading, Action::DataReceived(questions)) => {
                self.questions = questions;
                self.status = Status::Ready;
            }
            (Status::Loading, Action::LoadFailed) => {
                self.status = Status::Error;
            }
            (Status::Ready, Action::Start) => {
                self.status = Status::Active;
                self.seconds_remaining = self.questions.len() as u64 * self.secs_per_question;
            }
            (Status::Active, Action::NewAnswer(choice)) if self.answer.is_none() => {
                let Some(question) = self.questions.get(self.index) else {
                    return;
                };
                if choice == question.correct_option {
                    self.points += question.points;
                }
                self.answer = Some(choice);
            }
            (Status::Active, Action::NextQuestion) if self.index + 1 < self.questions.len() => {
                self.index += 1;
                self.answer = None;
            }
            (Status::Active, Action::Finish) => {
                self.status = Status::Finished;
                self.high_score = self.high_score.max(self.points);
            }
            (Status::Active, Action::Tick) => {
                self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
                // Running out of time is the same as finishing.
                if self.seconds_remaining == 0 {
                    self.status = Status::Finished;
                    self.high_score = self.high_score.max(self.points);
                }
            }
            (Status::Ready | Status::Finished, Action::Restart) => {
                // Questions and the session high score survive the reset.
                self.status = Status::Ready;
                self.index = 0;
                self.answer = None;
                self.points = 0;
                self.seconds_remaining = 0;
            }
            (status, action) => {
                warn!(?status, kind = action.kind().name(), "ignored action in current state");
            }
        }
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn max_possible_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }
}

/// Everything the event loop and the views work with: the quiz state machine
/// plus view-only state (option cursor, redraw flag, quit flag, the detail
/// text for the error screen).
pub struct AppState {
    pub config: AppConfig,
    pub keymap: Keymap,
    pub quiz: QuizState,
    pub selected: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, keymap: Keymap) -> Self {
        let quiz = QuizState::new(config.timing.secs_per_question);
        Self {
            config,
            keymap,
            quiz,
            selected: 0,
            should_quit: false,
            dirty: true,
            load_error: None,
        }
    }
}

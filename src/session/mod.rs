//! Session transcripts on disk.
//!
//! When enabled, appends one line per quiz milestone (questions loaded, quiz
//! started, answer given, quiz finished, restart) to a daily transcript file
//! named `quiz_<date>.log` in the configured directory (default:
//! `~/.local/share/crabquiz/sessions/`).

use crate::app::action::Action;
use crate::app::state::{QuizState, Status};
use crate::config::{self, SessionConfig};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Writes quiz milestones to daily transcript files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a transcript file cannot be created.
pub struct SessionLog {
    enabled: bool,
    dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl SessionLog {
    pub fn new(cfg: &SessionConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            dir: cfg.dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Record a dispatched action together with the state it produced.
    /// No-op when transcripts are disabled or the action has no milestone.
    pub fn record(&mut self, quiz: &QuizState, action: &Action) {
        if !self.enabled {
            return;
        }
        let Some(line) = describe(quiz, action) else {
            return;
        };
        let stamped = format!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), line);
        self.write_line(&stamped);
    }

    fn write_line(&mut self, line: &str) {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("quiz_{}.log", date);
        let dir = config::expand_home(&self.dir);
        let filepath = dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}

/// Human-readable milestone for a transcript line, if the action merits one.
/// Plain ticks are skipped; the tick that exhausts the timer records the
/// finish it forced.
fn describe(quiz: &QuizState, action: &Action) -> Option<String> {
    match action {
        Action::DataReceived(_) => Some(format!("loaded {} questions", quiz.num_questions())),
        Action::LoadFailed => Some("question fetch failed".to_string()),
        Action::Start => Some(format!(
            "quiz started: {} questions, {} seconds",
            quiz.num_questions(),
            quiz.seconds_remaining
        )),
        Action::NewAnswer(choice) => Some(format!(
            "answered option {} ({} points so far)",
            choice + 1,
            quiz.points
        )),
        Action::Finish => Some(finish_line(quiz)),
        Action::Tick if quiz.status == Status::Finished => {
            Some(format!("time ran out - {}", finish_line(quiz)))
        }
        Action::Restart => Some("quiz restarted".to_string()),
        _ => None,
    }
}

fn finish_line(quiz: &QuizState) -> String {
    format!(
        "finished with {}/{} points (best: {})",
        quiz.points,
        quiz.max_possible_points(),
        quiz.high_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Question;

    fn quiz_with_score() -> QuizState {
        let mut quiz = QuizState::new(30);
        quiz.dispatch(Action::DataReceived(vec![Question {
            text: "q".into(),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: 0,
            points: 10,
        }]));
        quiz.dispatch(Action::Start);
        quiz.dispatch(Action::NewAnswer(0));
        quiz
    }

    #[test]
    fn test_milestone_lines() {
        let mut quiz = quiz_with_score();
        assert_eq!(
            describe(&quiz, &Action::NewAnswer(0)).unwrap(),
            "answered option 1 (10 points so far)"
        );
        quiz.dispatch(Action::Finish);
        assert_eq!(
            describe(&quiz, &Action::Finish).unwrap(),
            "finished with 10/10 points (best: 10)"
        );
    }

    #[test]
    fn test_plain_ticks_are_not_recorded() {
        let quiz = quiz_with_score();
        assert_eq!(describe(&quiz, &Action::Tick), None);
    }

    #[test]
    fn test_the_exhausting_tick_records_the_finish() {
        let mut quiz = quiz_with_score();
        for _ in 0..30 {
            quiz.dispatch(Action::Tick);
        }
        assert_eq!(quiz.status, Status::Finished);
        let line = describe(&quiz, &Action::Tick).unwrap();
        assert!(line.starts_with("time ran out"), "{line}");
    }
}

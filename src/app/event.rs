use crate::app::state::Question;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Question list fetched from the feed
    QuestionsLoaded(Vec<Question>),

    /// Feed fetch or decode failed
    FetchFailed(String),

    /// One-second countdown tick
    Tick,
}

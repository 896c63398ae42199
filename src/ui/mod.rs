mod error_view;
mod header;
mod layout;
mod loader;
mod progress;
mod question;
mod results;
mod start;
mod status_bar;
mod theme;
mod timer;

use crate::app::state::{AppState, Status};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header);
    match state.quiz.status {
        Status::Loading => loader::render(frame, app_layout.body),
        Status::Error => error_view::render(frame, app_layout.body, state),
        Status::Ready => start::render(frame, app_layout.body, state),
        Status::Active => {
            let quiz_layout = layout::quiz_layout(app_layout.body);
            progress::render(frame, quiz_layout.progress, state);
            question::render(frame, quiz_layout.question, state);
            timer::render(frame, quiz_layout.timer, state);
        }
        Status::Finished => results::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;
    let num = quiz.num_questions().max(1);
    let completed = quiz.index + usize::from(quiz.answer.is_some());

    let label = format!(
        "{} / {}  |  {} / {} points",
        completed,
        num,
        quiz.points,
        quiz.max_possible_points()
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::accent())
        .ratio(completed as f64 / num as f64)
        .label(label);
    frame.render_widget(gauge, area);
}

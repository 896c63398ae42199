use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;
    let max = quiz.max_possible_points();
    let percentage = if max > 0 { quiz.points * 100 / max } else { 0 };

    let headline = if quiz.seconds_remaining == 0 && max > 0 {
        "Time's up!"
    } else {
        "Quiz complete!"
    };

    let lines = vec![
        Line::styled(headline, Theme::title()),
        Line::default(),
        Line::styled(
            format!(
                "You scored {} out of {} points ({}%)",
                quiz.points, max, percentage
            ),
            Theme::points(),
        ),
        Line::styled(
            format!("Session best: {} points", quiz.high_score),
            Theme::high_score(),
        ),
        Line::default(),
        Line::styled("Press Enter to play again", Theme::dim()),
    ];

    let paragraph = Paragraph::new(lines).centered();
    frame.render_widget(paragraph, layout::centered(area, 50, 7));
}

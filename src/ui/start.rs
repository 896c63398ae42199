use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let num = state.quiz.num_questions();

    let mut lines = vec![
        Line::styled("Welcome to CrabQuiz!", Theme::title()),
        Line::default(),
        Line::styled(
            format!("{} questions to test your trivia mettle", num),
            Theme::accent(),
        ),
    ];
    if state.quiz.high_score > 0 {
        lines.push(Line::styled(
            format!("Session best: {} points", state.quiz.high_score),
            Theme::high_score(),
        ));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Press Enter to start", Theme::dim()));

    let paragraph = Paragraph::new(lines).centered();
    frame.render_widget(paragraph, layout::centered(area, 50, 6));
}

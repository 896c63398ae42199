use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());

    let title = Line::from(vec![
        Span::styled("CrabQuiz", Theme::title()),
        Span::styled("  terminal trivia", Theme::dim()),
    ]);

    let paragraph = Paragraph::new(title).centered().block(block);
    frame.render_widget(paragraph, area);
}

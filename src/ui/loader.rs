use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(Line::styled("Loading questions...", Theme::dim())).centered();
    frame.render_widget(notice, layout::centered(area, 30, 1));
}

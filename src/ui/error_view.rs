use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let detail = state
        .load_error
        .as_deref()
        .unwrap_or("unknown error")
        .to_string();

    let lines = vec![
        Line::styled("Failed to load questions", Theme::error_message()),
        Line::default(),
        Line::styled(detail, Theme::dim()),
        Line::default(),
        Line::styled(
            "Check the feed URL in config.toml, then relaunch.",
            Theme::dim(),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, layout::centered(area, 60, 7));
}

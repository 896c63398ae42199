use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const LOW_WATER_SECS: u64 = 15;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let seconds = state.quiz.seconds_remaining;
    let style = if seconds <= LOW_WATER_SECS {
        Theme::timer_low()
    } else {
        Theme::timer_ok()
    };

    let clock = format!("{:02}:{:02}", seconds / 60, seconds % 60);
    let paragraph = Paragraph::new(Line::styled(clock, style))
        .centered()
        .block(
            Block::default()
                .title(" Time remaining ")
                .title_style(Theme::dim())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );
    frame.render_widget(paragraph, area);
}

use crate::app::action::ActionKind;
use crate::app::state::{AppState, Status};
use crate::ui::theme::Theme;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.config.ui.show_key_hints {
        parts.push(Span::styled(format!(" {} ", hints(state)), Theme::status_bar()));
    }

    let best = format!(" best: {} ", state.quiz.high_score);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + best.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(best, Theme::high_score().bg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}

fn hints(state: &AppState) -> String {
    let key = |kind| key_label(state.keymap.key_for(kind));
    match state.quiz.status {
        Status::Loading => "fetching questions...".to_string(),
        Status::Error => "q quit".to_string(),
        Status::Ready => format!("Enter/{} start | q quit", key(ActionKind::Start)),
        Status::Active if state.quiz.answer.is_none() => {
            "1-4 answer | Up/Down select | Enter submit | q quit".to_string()
        }
        Status::Active if state.quiz.index + 1 >= state.quiz.num_questions() => {
            format!("Enter/{} finish | q quit", key(ActionKind::Finish))
        }
        Status::Active => format!("Enter/{} next | q quit", key(ActionKind::NextQuestion)),
        Status::Finished => format!("Enter/{} restart | q quit", key(ActionKind::Restart)),
    }
}

fn key_label(key: Option<KeyCode>) -> String {
    match key {
        Some(KeyCode::Char(c)) => c.to_string(),
        _ => "?".to_string(),
    }
}

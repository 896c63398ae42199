use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn accent() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn option_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn option_selected() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn option_correct() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn option_wrong() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn points() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn timer_ok() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn timer_low() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn high_score() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}

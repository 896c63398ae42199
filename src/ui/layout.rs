use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

pub struct QuizLayout {
    pub progress: Rect,
    pub question: Rect,
    pub timer: Rect,
}

/// Split the body while a quiz is running: progress gauge on top, the
/// question in the middle, the countdown at the bottom.
pub fn quiz_layout(body: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(7),    // Question + options
            Constraint::Length(3), // Timer
        ])
        .split(body);

    QuizLayout {
        progress: chunks[0],
        question: chunks[1],
        timer: chunks[2],
    }
}

/// Centered sub-rectangle used by the full-screen notices.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

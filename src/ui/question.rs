use crate::app::state::{AppState, Question, QuizState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let quiz = &state.quiz;
    let Some(question) = quiz.current_question() else {
        return;
    };

    let block = Block::default()
        .title(format!(
            " Question {} of {} ",
            quiz.index + 1,
            quiz.num_questions()
        ))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines = vec![
        Line::styled(question.text.clone(), Theme::title()),
        Line::styled(format!("worth {} points", question.points), Theme::points()),
        Line::default(),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let marker = if quiz.answer.is_none() && i == state.selected {
            "> "
        } else {
            "  "
        };
        lines.push(Line::styled(
            format!("{}{}. {}", marker, i + 1, option),
            option_style(quiz, question, i, state.selected),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Before answering, the cursor highlights a candidate. Afterwards the
/// correct option goes green and a wrong pick goes red, mirroring the
/// reveal on the original answer buttons.
fn option_style(quiz: &QuizState, question: &Question, option: usize, selected: usize) -> Style {
    match quiz.answer {
        None if option == selected => Theme::option_selected(),
        None => Theme::option_normal(),
        Some(_) if option == question.correct_option => Theme::option_correct(),
        Some(answer) if option == answer => Theme::option_wrong(),
        Some(_) => Theme::dim(),
    }
}

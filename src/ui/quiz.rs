use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;
use crate::session::{QuizSession, SECONDS_PER_QUESTION, TimerLevel};

const HEADER: &str = "QUIZ APPLICATION";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_position(frame, chunks[1], session);

    // The dialogs draw over the last question; a completed session has none.
    if let Some(question) = session.current_question() {
        render_question_text(frame, chunks[2], session.current_index(), question);
        render_options(frame, chunks[3], question, session.selected_option(), app.cursor());
    }

    render_countdown(frame, chunks[4], session);
    render_time_gauge(frame, chunks[5], session);
    render_buttons(frame, chunks[7], session);
    render_controls(frame, chunks[8]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(HEADER)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue).bold())
        .block(Block::default().padding(Padding::vertical(1)).bg(Color::Blue));
    frame.render_widget(widget, area);
}

fn render_position(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let current = (session.current_index() + 1).min(session.total_questions());
    let widget = Paragraph::new(format!("{}/{} ", current, session.total_questions()))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, index: usize, question: &Question) {
    let widget = Paragraph::new(format!("{}. {}", index + 1, question.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: Option<usize>,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let under_cursor = index == cursor;

        let style = match (under_cursor, is_selected) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::White).bold(),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if under_cursor { ">" } else { " " };
        let radio = if is_selected { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, area);
}

fn countdown_color(level: TimerLevel) -> Color {
    match level {
        TimerLevel::Normal => Color::DarkGray,
        TimerLevel::Warning => Color::Yellow,
        TimerLevel::Critical => Color::Red,
    }
}

fn render_countdown(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let widget = Paragraph::new(format!("Time: {}s", session.time_left()))
        .alignment(Alignment::Center)
        .fg(countdown_color(session.timer_level()))
        .bold();
    frame.render_widget(widget, area);
}

fn render_time_gauge(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let time_left = session.time_left().min(SECONDS_PER_QUESTION);
    let ratio = f64::from(time_left) / f64::from(SECONDS_PER_QUESTION);

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::DarkGray))
        .ratio(ratio)
        .label(time_left.to_string());
    frame.render_widget(widget, area);
}

fn render_buttons(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let previous_style = if session.can_retreat() {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_label = if session.is_last_question() {
        " Submit "
    } else {
        " Next ▶ "
    };

    let line = Line::from(vec![
        Span::styled(" ◀ Previous ", previous_style),
        Span::raw("    "),
        Span::styled(next_label, Style::default().fg(Color::White).bg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  space/1-4 choose  ·  enter next  ·  p previous  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

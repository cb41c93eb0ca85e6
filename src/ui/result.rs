use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::Summary;

const DIALOG_WIDTH: u16 = 44;

pub fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let Some(summary) = app.session().summary() else {
        return;
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Completed!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {} / {}", summary.score, summary.total),
            Style::default().fg(grade_color(&summary)).bold(),
        )),
        Line::from(format!("Accuracy: {}", summary.accuracy_label())),
        Line::from(""),
        Line::from("Thank you for playing!".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(Color::Green).bold())),
    ];

    render_dialog(frame, area, " Final Result ", content);
}

pub fn render_confirm(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("Do you want to restart the quiz?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Y ] Yes", Style::default().fg(Color::Green).bold()),
            Span::raw("    "),
            Span::styled("[ N ] No", Style::default().fg(Color::Red).bold()),
        ]),
    ];

    render_dialog(frame, area, " Restart? ", content);
}

fn grade_color(summary: &Summary) -> Color {
    match summary.accuracy() as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_dialog(frame: &mut Frame, area: Rect, title: &str, content: Vec<Line>) {
    let height = content.len() as u16 + 3;
    let dialog = centered(area, DIALOG_WIDTH, height);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(Color::Cyan))
            .borders(Borders::ALL)
            .border_style(Color::White),
    );

    frame.render_widget(Clear, dialog);
    frame.render_widget(widget, dialog);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    dialog
}

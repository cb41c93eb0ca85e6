mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, AppState};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    quiz::render(frame, area, app);

    match app.state {
        AppState::Quiz => {}
        AppState::Result => result::render_summary(frame, area, app),
        AppState::ConfirmRestart => result::render_confirm(frame, area),
    }
}

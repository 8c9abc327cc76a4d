mod alerts;
mod avatar;
mod blanket;
mod comfort;
mod heatmap;
mod help;
mod impact;
mod status_bar;
mod timeline;
mod utils;
mod vitals;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, AppView};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const VITALS_HEIGHT: u16 = 5;
const CONTROL_ROW_HEIGHT: u16 = 7;
const MIDDLE_ROW_MIN: u16 = 9;
const BOTTOM_ROW_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.current_theme();
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    status_bar::render_title_bar(frame, outer_chunks[0], &theme);
    status_bar::render_status_bar(frame, outer_chunks[2], app, &theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(VITALS_HEIGHT),
            Constraint::Length(CONTROL_ROW_HEIGHT),
            Constraint::Min(MIDDLE_ROW_MIN),
            Constraint::Length(BOTTOM_ROW_HEIGHT),
        ])
        .split(outer_chunks[1]);

    vitals::render(frame, rows[0], app, &theme);

    let control_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    blanket::render(frame, control_row[0], app, &theme);
    alerts::render(frame, control_row[1], app, &theme);

    let middle_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(38),
            Constraint::Percentage(40),
        ])
        .split(rows[2]);
    avatar::render(frame, middle_row[0], app, &theme);
    heatmap::render(frame, middle_row[1], app, &theme);
    timeline::render(frame, middle_row[2], app, &theme);

    let bottom_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(rows[3]);
    comfort::render(frame, bottom_row[0], app, &theme);
    impact::render(frame, bottom_row[1], app, &theme);

    if app.view == AppView::Help {
        help::render(frame, app, &theme);
    }
}

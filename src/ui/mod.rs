//! UI module for rendering the TUI

mod components;
mod layout;

use crate::app::App;
use components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);
    draw_overview(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

/// Draw the form overview panel with the save control underneath
fn draw_overview(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Overview
            Constraint::Length(BUTTON_HEIGHT), // Save button
        ])
        .split(area);

    let document = app.editor.document();
    let lines = vec![
        Line::from(format!("Fields: {}", document.config.fields.len())),
        Line::from(format!(
            "Conditional groups: {}",
            app.conditionals.groups().len()
        )),
        Line::from(format!("Processors: {}", app.processors.processors().len())),
        Line::from(format!(
            "Pending edits: {}",
            app.editor.pending_edit_count()
        )),
    ];
    let overview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Overview ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(overview, chunks[0]);

    // Save control is always selected; it is the only actionable control
    let button_area = centered_button_area(chunks[1]);
    render_button(
        frame,
        button_area,
        app.state.save_indicator.label(),
        true,
        app.state.save_indicator.is_saving(),
    );
}

fn centered_button_area(area: Rect) -> Rect {
    const BUTTON_WIDTH: u16 = 16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}

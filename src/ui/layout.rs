//! Layout components (header, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: header, content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let connection = if app.state.connected {
        Span::styled("online", Style::default().fg(Color::Green))
    } else {
        Span::styled("offline", Style::default().fg(Color::Red))
    };

    let line = Line::from(vec![
        Span::styled(
            " Form Builder ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("— form {} — ", app.state.form_id)),
        connection,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.state.save_indicator.notice_visible() {
        Line::from(Span::styled(
            " Form saved ",
            Style::default().fg(Color::Black).bg(Color::Green),
        ))
    } else if let Some(message) = &app.state.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let last_saved = app
            .state
            .last_saved_at
            .map(|at| format!("last saved {}", at.format("%H:%M:%S")))
            .unwrap_or_else(|| "not saved this session".to_string());
        Line::from(vec![
            Span::styled(" s ", Style::default().fg(Color::Cyan)),
            Span::raw("save  "),
            Span::styled(" q ", Style::default().fg(Color::Cyan)),
            Span::raw("quit  "),
            Span::styled(last_saved, Style::default().fg(Color::DarkGray)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use lifetracker_core::event::Stage;

use crate::layout::ScreenRects;

/// Read-only view of the state the shell chrome needs each frame.
pub struct ShellView<'a> {
    pub current_state: &'a str,
    pub current_stage: Option<Stage>,
    pub banner_enabled: bool,
    pub event_count: usize,
}

/// Render the title bar, status card, control row, and count header.
/// The log body and banner overlay are drawn separately.
pub fn render_shell(f: &mut Frame, rects: ScreenRects, view: ShellView<'_>) {
    let title = Paragraph::new(Line::from(
        "LifeTracker | q quit | b banner | c clear | 1-6 inject",
    ))
    .style(Style::default().bold());
    f.render_widget(title, rects.title);

    render_status_card(f, rects, &view);

    let toggle_mark = if view.banner_enabled { "[x]" } else { "[ ]" };
    let controls = Line::from(vec![
        Span::raw(format!("{} show banner  (b)", toggle_mark)),
        Span::raw("    "),
        Span::styled("clear log  (c)", Style::default().fg(Color::LightRed)),
    ]);
    f.render_widget(Paragraph::new(controls), rects.controls);

    let header = Line::from(format!("Lifecycle events ({})", view.event_count).bold());
    f.render_widget(Paragraph::new(header), rects.header);
}

fn render_status_card(f: &mut Frame, rects: ScreenRects, view: &ShellView<'_>) {
    let dot_color = view
        .current_stage
        .map(Stage::marker_color)
        .unwrap_or(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::raw("Current State: "),
        Span::styled(view.current_state, Style::default().bold()),
    ]);
    let card = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(card, rects.status);
}

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use lifetracker_core::event::LifecycleEvent;

/// Render the log body: a placeholder when empty, otherwise a scrollable
/// list of event rows pinned to the newest entry.
///
/// Each row shows a stage-colored marker, the hook name, and the timestamp.
/// Selection is forced to the last row every frame, so the list auto-scrolls
/// on every append.
pub fn render_event_log(
    f: &mut Frame,
    area: Rect,
    events: &[LifecycleEvent],
    list_state: &mut ListState,
) {
    let block = Block::default().borders(Borders::ALL);

    if events.is_empty() {
        let placeholder = Paragraph::new(Line::from(
            "No events logged yet...".fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = events.iter().map(event_row).collect();
    let list = List::new(items).block(block);

    list_state.select(Some(events.len() - 1));
    f.render_stateful_widget(list, area, list_state);
}

fn event_row(event: &LifecycleEvent) -> ListItem<'_> {
    let line = Line::from(vec![
        Span::styled("▎ ", Style::default().fg(event.stage.marker_color())),
        Span::styled(&event.name, Style::default().bold()),
        Span::raw("  "),
        Span::styled(&event.timestamp, Style::default().fg(Color::DarkGray)),
    ]);
    ListItem::new(line)
}

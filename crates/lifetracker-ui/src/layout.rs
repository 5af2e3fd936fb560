use ratatui::layout::{Constraint, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct ScreenRects {
    pub title: Rect,
    pub status: Rect,
    pub controls: Rect,
    pub header: Rect,
    pub log: Rect,
}

/// Split the whole screen into the five fixed regions, top to bottom:
/// title bar, status card, control row, count header, and the log body
/// taking whatever remains.
pub fn screen_layout(area: Rect) -> ScreenRects {
    let rows = Layout::vertical([
        Constraint::Length(1), // title bar
        Constraint::Length(3), // status card (bordered)
        Constraint::Length(1), // control row
        Constraint::Length(1), // count header
        Constraint::Min(1),    // log body
    ])
    .split(area);

    ScreenRects {
        title: rows[0],
        status: rows[1],
        controls: rows[2],
        header: rows[3],
        log: rows[4],
    }
}

/// Bottom-anchored rect for the transient banner: one row high, centered,
/// clamped to the available width.
pub fn banner_rect(area: Rect, message_width: u16) -> Rect {
    let width = (message_width + 4).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height.saturating_sub(2);
    Rect::new(x, y, width, 1)
}

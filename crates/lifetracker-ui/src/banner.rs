use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::layout::banner_rect;

/// Paint the transient banner over whatever is beneath it: a one-line,
/// bottom-centered strip in the event's marker color.
pub fn render_banner(f: &mut Frame, area: Rect, message: &str, color: Color) {
    if area.height < 2 || area.width == 0 {
        return;
    }
    let text = format!("Lifecycle: {message}");
    let rect = banner_rect(area, text.len() as u16);

    f.render_widget(Clear, rect);
    let banner = Paragraph::new(Line::from(text.bold()))
        .centered()
        .style(Style::default().fg(Color::Black).bg(color));
    f.render_widget(banner, rect);
}

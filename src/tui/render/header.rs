use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

const APP_NAME: &str = "to.do";

/// Render the header band: app name on the left, task counter on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let accent = app.theme.accent;
    let bright = app.theme.text_bright;
    let band = Style::default().bg(accent);

    let name_style = Style::default()
        .fg(bright)
        .bg(accent)
        .add_modifier(Modifier::BOLD);
    let counter_style = Style::default().fg(bright).bg(accent);

    let name = format!("  {}", APP_NAME);
    let counter = format!("{}  ", app.screen.locale().counter(app.screen.tasks_counter()));
    let width = area.width as usize;
    let used = display_width(&name) + display_width(&counter);

    let mut spans = vec![Span::styled(name, name_style)];
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), band));
        spans.push(Span::styled(counter, counter_style));
    }

    let lines = vec![Line::from(""), Line::from(spans), Line::from("")];
    frame.render_widget(Paragraph::new(lines).style(band), area);
}

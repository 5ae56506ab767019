use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};

/// Render the new-task input bar
pub fn render_todo_input(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.input_bg;
    let focused = app.focus == Focus::NewTask && !app.prompt.is_open();
    let border_color = if focused {
        app.theme.accent
    } else {
        app.theme.dim
    };

    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            app.screen.locale().messages().input_placeholder,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            app.input.text(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    // Keep the cursor visible on long input
    let cursor_col = app.input.cursor_col() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    frame.render_widget(Paragraph::new(line).block(block).scroll((0, scroll)), area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor_col - scroll, inner.y));
    }
}

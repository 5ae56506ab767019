use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
            (" g/G", "Jump to top/bottom"),
            (" Space/x", "Mark done / not done"),
            (" e/Enter", "Edit title"),
            (" d/Del", "Remove (asks first)"),
            (" a/i/Tab", "Add a new task"),
            (" q", "Quit"),
        ],
    ),
    (
        "Editing",
        &[
            (" Enter", "Save title"),
            (" Esc", "Discard changes"),
            (" Ctrl-T", "Mark done / not done"),
            (" \u{2191}\u{2193}", "Leave row (keeps draft)"),
        ],
    ),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
        for (key, desc) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = centered_rect_fixed(44, height, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::screen::ButtonStyle;
use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::centered_rect_fixed;

/// Render the open prompt as a centered modal
pub fn render_prompt_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt.prompt else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut buttons: Vec<Span> = Vec::new();
    for (i, button) in prompt.buttons.iter().enumerate() {
        let mut style = match button.style {
            ButtonStyle::Cancel => Style::default().fg(app.theme.dim).bg(bg),
            ButtonStyle::Default => Style::default().fg(app.theme.accent).bg(bg),
        };
        if i == app.prompt.choice {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        buttons.push(Span::styled("  ", text_style));
        buttons.push(Span::styled(format!(" {} ", button.label), style));
    }
    // Buttons sit right-aligned like a native alert
    let buttons_w: usize = buttons.iter().map(|s| display_width(&s.content)).sum();
    if buttons_w < inner_w {
        buttons.insert(0, Span::styled(" ".repeat(inner_w - buttons_w - 1), text_style));
    }

    let body_lines = wrapped_line_count(&prompt.body, inner_w.saturating_sub(2));
    let lines = vec![
        Line::from(Span::styled(format!(" {}", prompt.title), header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(format!(" {}", prompt.body), text_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(buttons),
    ];

    let popup_h = (body_lines as u16 + 6).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, overlay_area);
}

/// Rough number of lines `text` needs at `width` columns
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    display_width(text).div_ceil(width).max(1)
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Key hints for the current focus
pub fn key_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.prompt.is_open() {
        return &[("\u{2190}\u{2192}", "choose"), ("Enter", "select"), ("Esc", "cancel")];
    }
    match app.focus {
        Focus::NewTask => &[("Enter", "add"), ("Tab", "list"), ("^C", "quit")],
        Focus::List => {
            let editing = app
                .list_view
                .selected_row()
                .is_some_and(|row| row.is_focused());
            if editing {
                &[("Enter", "save"), ("Esc", "cancel"), ("^T", "done")]
            } else {
                &[
                    ("Space", "done"),
                    ("e", "edit"),
                    ("d", "remove"),
                    ("a", "add"),
                    ("?", "help"),
                    ("q", "quit"),
                ]
            }
        }
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.text).bg(bg);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(" ", desc_style)];
    if app.show_key_hints {
        for (key, desc) in key_hints(app) {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {}  ", desc), desc_style));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn hints_follow_focus() {
        let mut app = app_with_titles(&["A"]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Space done"));

        let task = app.screen.tasks().tasks()[0].clone();
        app.list_view.start_editing(&task);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Enter save"));
    }

    #[test]
    fn hints_can_be_turned_off() {
        let mut app = app_with_titles(&["A"]);
        app.show_key_hints = false;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::screen::TaskRow;
use crate::tui::app::{App, Focus};
use crate::util::unicode::{display_width, truncate_to_width};

/// Left margin plus the `[x] ` marker
const PREFIX_W: usize = 6;
/// Edit/cancel and remove affordances on the right
const SUFFIX_W: usize = 8;

const EDIT_ICON: &str = "\u{270E}";
const CANCEL_ICON: &str = "\u{2715}";
const REMOVE_ICON: &str = "\u{2326}";

/// Render the task rows, one line per task, in list order
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    if area.height == 0 {
        return;
    }

    let tasks = app.screen.tasks().tasks();
    if tasks.is_empty() {
        let msg = Line::from(Span::styled(
            format!("  {}", app.screen.locale().messages().empty_list),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(vec![Line::from(""), msg]), area);
        return;
    }

    let height = area.height as usize;
    let cursor = app.list_view.cursor();
    let scroll = (cursor + 1).saturating_sub(height);
    let list_focused = app.focus == Focus::List && !app.prompt.is_open();

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_pos = None;
    for (i, (row, task)) in app
        .list_view
        .rows()
        .zip(tasks.iter())
        .enumerate()
        .skip(scroll)
        .take(height)
    {
        let selected = list_focused && i == cursor;
        let (line, col) = task_line(app, row, task, selected, area.width as usize);
        if selected && row.is_focused() {
            cursor_pos = col.map(|c| (c, (i - scroll) as u16));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if let Some((col, row)) = cursor_pos {
        frame.set_cursor_position(Position::new(area.x + col, area.y + row));
    }
}

/// Build one row's line. Also returns the text cursor column when the row
/// is editing.
fn task_line<'a>(
    app: &App,
    row: &'a TaskRow,
    task: &'a Task,
    selected: bool,
    width: usize,
) -> (Line<'a>, Option<u16>) {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);
    let title_width = width.saturating_sub(PREFIX_W + SUFFIX_W);

    let marker_style = if task.done {
        base.fg(theme.done).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.dim)
    };

    let mut spans = vec![
        Span::styled(if selected { "\u{258E} " } else { "  " }, base.fg(theme.accent)),
        Span::styled(format!("[{}]", task.marker_char()), marker_style),
        Span::styled(" ", base),
    ];

    let mut cursor_col = None;
    let shown = match row.draft() {
        Some(draft) => {
            // Show the tail when the cursor is past the visible width
            let col = draft.cursor_col();
            let skip = (col + 1).saturating_sub(title_width);
            let visible: String = skip_columns(draft.text(), skip);
            let visible = truncate_to_width(&visible, title_width);
            cursor_col = Some((PREFIX_W + col - skip) as u16);
            let style = base
                .fg(theme.text_bright)
                .add_modifier(Modifier::UNDERLINED);
            spans.push(Span::styled(visible.clone(), style));
            visible
        }
        None => {
            let title = truncate_to_width(&task.title, title_width);
            let mut style = base.fg(theme.title_color(task.done));
            if task.done {
                style = style.add_modifier(Modifier::CROSSED_OUT);
            }
            spans.push(Span::styled(title.clone(), style));
            title
        }
    };

    let pad = title_width.saturating_sub(display_width(&shown));
    spans.push(Span::styled(" ".repeat(pad), base));

    // Affordances: edit or cancel, then remove (dimmed while editing)
    let (edit_icon, edit_style) = if row.is_editing() {
        (CANCEL_ICON, base.fg(theme.text))
    } else {
        (EDIT_ICON, base.fg(theme.dim))
    };
    let remove_style = if row.can_remove() {
        base.fg(theme.danger)
    } else {
        base.fg(theme.dim).add_modifier(Modifier::DIM)
    };
    spans.push(Span::styled("  ", base));
    spans.push(Span::styled(edit_icon, edit_style));
    spans.push(Span::styled(" \u{2502} ", base.fg(theme.dim)));
    spans.push(Span::styled(REMOVE_ICON, remove_style));
    spans.push(Span::styled(" ", base));

    (Line::from(spans), cursor_col)
}

/// Drop the first `cols` terminal columns of `s`
fn skip_columns(s: &str, cols: usize) -> String {
    let mut skipped = 0;
    let mut out = String::new();
    for c in s.chars() {
        if skipped < cols {
            skipped += display_width(c.encode_utf8(&mut [0; 4]));
            continue;
        }
        out.push(c);
    }
    out
}

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::tui::app::{App, Focus};

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App with the given tasks added, list focused on the first row.
pub fn app_with_titles(titles: &[&str]) -> App {
    let mut app = App::new(&AppConfig::default());
    for title in titles {
        app.input.set(*title);
        app.submit_new_task();
    }
    app.set_focus(Focus::List);
    app.list_view.jump_to_top();
    app
}

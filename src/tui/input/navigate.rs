use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Movement; moving up past the first row goes to the input bar
        KeyCode::Up | KeyCode::Char('k') => {
            if app.list_view.cursor() == 0 {
                app.set_focus(Focus::NewTask);
            } else {
                app.list_view.move_cursor(-1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.list_view.move_cursor(1),
        KeyCode::Home | KeyCode::Char('g') => app.list_view.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.list_view.jump_to_bottom(),

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.set_focus(Focus::NewTask),

        // Completion marker
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.list_view.selected_id() {
                let mut actions = app.screen.actions(&mut app.prompt);
                app.list_view.toggle_done(id, &mut actions);
                app.sync_rows();
            }
        }

        // Start editing (or refocus a row left in editing)
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(task) = app.selected_task().cloned() {
                app.list_view.start_editing(&task);
            }
        }

        // Remove, behind a confirmation
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.list_view.selected_id() {
                let mut actions = app.screen.actions(&mut app.prompt);
                app.list_view.remove(id, &mut actions);
            }
        }

        _ => {}
    }
}

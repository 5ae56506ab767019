use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::screen::TextField;
use crate::tui::app::{App, Focus};

/// Apply a line-editing key to `field`. Returns whether the key was used.
pub(super) fn edit_field(field: &mut TextField, key: KeyEvent) -> bool {
    let word = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Left if word => field.move_word_left(),
        KeyCode::Right if word => field.move_word_right(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Backspace if word => field.delete_word_left(),
        KeyCode::Backspace => {
            field.backspace();
        }
        KeyCode::Delete => {
            field.delete();
        }
        KeyCode::Char('a') if key.modifiers == KeyModifiers::CONTROL => field.move_home(),
        KeyCode::Char('e') if key.modifiers == KeyModifiers::CONTROL => field.move_end(),
        KeyCode::Char('w') if key.modifiers == KeyModifiers::CONTROL => field.delete_word_left(),
        KeyCode::Char(c) if !word => field.insert_char(c),
        _ => return false,
    }
    true
}

/// Keys while the new-task input bar has focus
pub(super) fn handle_new_task(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.set_focus(Focus::List),
        _ => {
            edit_field(&mut app.input, key);
        }
    }
}

/// Keys while the row under the cursor is being edited
pub(super) fn handle_row_edit(app: &mut App, key: KeyEvent) {
    let Some(id) = app.list_view.selected_id() else {
        return;
    };
    match (key.modifiers, key.code) {
        // Commit
        (_, KeyCode::Enter) => {
            let mut actions = app.screen.actions(&mut app.prompt);
            app.list_view.submit_editing(id, &mut actions);
            app.sync_rows();
        }
        // Cancel
        (_, KeyCode::Esc) => {
            app.list_view.cancel_editing(id);
        }
        // The completion marker stays operable while editing
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
            let mut actions = app.screen.actions(&mut app.prompt);
            app.list_view.toggle_done(id, &mut actions);
            app.sync_rows();
        }
        (_, KeyCode::Up) => app.list_view.move_cursor(-1),
        (_, KeyCode::Down) => app.list_view.move_cursor(1),
        (_, KeyCode::Tab) => app.set_focus(Focus::NewTask),
        _ => {
            if let Some(draft) = app
                .list_view
                .selected_row_mut()
                .and_then(|row| row.draft_mut())
            {
                edit_field(draft, key);
            }
        }
    }
}

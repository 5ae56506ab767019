mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use confirm::handle_confirm;
use edit::{handle_new_task, handle_row_edit};
use navigate::handle_navigate;

/// Handle a key event for whatever currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // An open prompt is modal
    if app.prompt.is_open() {
        handle_confirm(app, key);
        return;
    }

    // Any key closes the help overlay
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.focus {
        Focus::NewTask => handle_new_task(app, key),
        Focus::List => {
            let editing = app
                .list_view
                .selected_row()
                .is_some_and(|row| row.is_focused());
            if editing {
                handle_row_edit(app, key);
            } else {
                handle_navigate(app, key);
            }
        }
    }
}

/// Handle a bracketed paste: goes into whichever text field has focus
pub fn handle_paste(app: &mut App, text: &str) {
    if app.prompt.is_open() || text.is_empty() {
        return;
    }
    match app.focus {
        Focus::NewTask => app.input.insert_str(text),
        Focus::List => {
            if let Some(draft) = app
                .list_view
                .selected_row_mut()
                .filter(|row| row.is_focused())
                .and_then(|row| row.draft_mut())
            {
                draft.insert_str(text);
            }
        }
    }
}

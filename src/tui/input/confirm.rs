use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Keys while a prompt is open. Nothing else reacts until it is answered.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let Some(prompt) = &app.prompt.prompt else {
        return;
    };
    let count = prompt.buttons.len();
    if count == 0 {
        // Nothing to pick: any key dismisses
        app.prompt.prompt = None;
        return;
    }

    match key.code {
        KeyCode::Left | KeyCode::BackTab => {
            app.prompt.choice = (app.prompt.choice + count - 1) % count;
        }
        KeyCode::Right | KeyCode::Tab => {
            app.prompt.choice = (app.prompt.choice + 1) % count;
        }
        KeyCode::Enter => {
            let choice = app.prompt.choice;
            app.resolve_prompt(choice);
        }
        KeyCode::Esc => {
            if let Some(index) = prompt.cancel_index() {
                app.resolve_prompt(index);
            }
        }
        KeyCode::Char(c) => {
            if let Some(index) = prompt.index_for_key(c) {
                app.resolve_prompt(index);
            }
        }
        _ => {}
    }
}

use indexmap::IndexMap;
use tracing::debug;

use crate::model::task::{Task, TaskId};

use super::row::{TaskActions, TaskRow};

/// One row per task, keyed by id, in list order.
///
/// Owns nothing of the list itself: `sync` reconciles the rows with the
/// canonical tasks after every change, so a row survives re-renders and
/// its edit state dies with its task.
#[derive(Debug, Clone, Default)]
pub struct TaskListView {
    rows: IndexMap<TaskId, TaskRow>,
    cursor: usize,
}

impl TaskListView {
    pub fn new() -> Self {
        TaskListView::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &TaskRow> {
        self.rows.values()
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskRow> {
        self.rows.get(&id)
    }

    pub fn row_mut(&mut self, id: TaskId) -> Option<&mut TaskRow> {
        self.rows.get_mut(&id)
    }

    /// Rebuild the row sequence from `tasks`, keeping existing rows
    pub fn sync(&mut self, tasks: &[Task]) {
        let selected = self.selected_id();
        let mut old = std::mem::take(&mut self.rows);
        for task in tasks {
            let row = old
                .shift_remove(&task.id)
                .unwrap_or_else(|| TaskRow::new(task.id));
            self.rows.insert(task.id, row);
        }
        for (id, row) in old {
            if row.is_editing() {
                debug!(task_id = %id, "dropping row that was still being edited");
            }
        }

        // Follow the selected task if it is still there
        if let Some(idx) = selected.and_then(|id| self.rows.get_index_of(&id)) {
            self.cursor = idx;
        }
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.focus_cursor_row();
    }

    // ---------------------------------------------------------------------
    // Cursor

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.rows.get_index(self.cursor).map(|(id, _)| *id)
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.rows.get_index(self.cursor).map(|(_, row)| row)
    }

    pub fn selected_row_mut(&mut self) -> Option<&mut TaskRow> {
        self.rows.get_index_mut(self.cursor).map(|(_, row)| row)
    }

    /// Move the cursor, clamped. An editing row left behind keeps its
    /// draft but loses focus.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let max = self.rows.len() - 1;
        let target = (self.cursor as isize + delta).clamp(0, max as isize) as usize;
        self.set_cursor(target);
    }

    pub fn set_cursor(&mut self, index: usize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let target = index.min(self.rows.len() - 1);
        if let Some(row) = self.selected_row_mut() {
            row.blur();
        }
        self.cursor = target;
        self.focus_cursor_row();
    }

    pub fn jump_to_top(&mut self) {
        self.set_cursor(0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.set_cursor(self.rows.len().saturating_sub(1));
    }

    /// Only the row under the cursor may hold focus
    fn focus_cursor_row(&mut self) {
        let cursor = self.cursor;
        for (i, row) in self.rows.values_mut().enumerate() {
            if i == cursor {
                row.focus();
            } else {
                row.blur();
            }
        }
    }

    /// Drop focus from every row, e.g. while the new-task input is active
    pub fn blur_all(&mut self) {
        for row in self.rows.values_mut() {
            row.blur();
        }
    }

    pub fn refocus(&mut self) {
        self.focus_cursor_row();
    }

    // ---------------------------------------------------------------------
    // Pass-through to rows

    pub fn start_editing(&mut self, task: &Task) -> bool {
        match self.rows.get_mut(&task.id) {
            Some(row) => {
                row.start_editing(task);
                true
            }
            None => false,
        }
    }

    pub fn cancel_editing(&mut self, id: TaskId) -> bool {
        self.rows.get_mut(&id).is_some_and(|row| row.cancel_editing())
    }

    pub fn submit_editing(&mut self, id: TaskId, actions: &mut impl TaskActions) -> bool {
        self.rows
            .get_mut(&id)
            .is_some_and(|row| row.submit_editing(actions))
    }

    pub fn toggle_done(&self, id: TaskId, actions: &mut impl TaskActions) -> bool {
        match self.rows.get(&id) {
            Some(row) => {
                row.toggle_done(actions);
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: TaskId, actions: &mut impl TaskActions) -> bool {
        self.rows.get(&id).is_some_and(|row| row.remove(actions))
    }
}

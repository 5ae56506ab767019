use crate::model::task::{Task, TaskId};

use super::field::TextField;

/// Mutations a row may request from whoever owns the canonical list
pub trait TaskActions {
    fn toggle_task_done(&mut self, id: TaskId);
    fn edit_task(&mut self, id: TaskId, new_title: String);
    fn remove_task(&mut self, id: TaskId);
}

/// Local edit state of a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    Editing {
        /// Working value, committed verbatim
        draft: TextField,
        /// Whether keystrokes currently go to this row's field
        focused: bool,
    },
}

/// Per-task view state. Never touches the list itself: every change is
/// requested through [`TaskActions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    id: TaskId,
    state: RowState,
}

impl TaskRow {
    pub fn new(id: TaskId) -> Self {
        TaskRow {
            id,
            state: RowState::Viewing,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn state(&self) -> &RowState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, RowState::Editing { .. })
    }

    pub fn is_focused(&self) -> bool {
        matches!(self.state, RowState::Editing { focused: true, .. })
    }

    /// The remove control is disabled while editing
    pub fn can_remove(&self) -> bool {
        !self.is_editing()
    }

    pub fn draft(&self) -> Option<&TextField> {
        match &self.state {
            RowState::Editing { draft, .. } => Some(draft),
            RowState::Viewing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TextField> {
        match &mut self.state {
            RowState::Editing { draft, .. } => Some(draft),
            RowState::Viewing => None,
        }
    }

    /// Viewing → Editing. The draft starts as the task's current title and
    /// the field takes focus. Already editing: only refocuses.
    pub fn start_editing(&mut self, task: &Task) {
        match &mut self.state {
            RowState::Editing { focused, .. } => *focused = true,
            RowState::Viewing => {
                self.state = RowState::Editing {
                    draft: TextField::with_text(task.title.clone()),
                    focused: true,
                };
            }
        }
    }

    /// Editing → Viewing without calling edit. The draft is discarded.
    pub fn cancel_editing(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.state = RowState::Viewing;
        true
    }

    /// Editing → Viewing, committing the draft as-is (no trimming, empty
    /// allowed).
    pub fn submit_editing(&mut self, actions: &mut impl TaskActions) -> bool {
        let state = std::mem::replace(&mut self.state, RowState::Viewing);
        match state {
            RowState::Editing { mut draft, .. } => {
                actions.edit_task(self.id, draft.take());
                true
            }
            RowState::Viewing => false,
        }
    }

    /// The completion marker stays operable in both states
    pub fn toggle_done(&self, actions: &mut impl TaskActions) {
        actions.toggle_task_done(self.id);
    }

    /// Request removal. Ignored while editing; returns whether it was sent.
    pub fn remove(&self, actions: &mut impl TaskActions) -> bool {
        if !self.can_remove() {
            return false;
        }
        actions.remove_task(self.id);
        true
    }

    pub fn focus(&mut self) {
        if let RowState::Editing { focused, .. } = &mut self.state {
            *focused = true;
        }
    }

    pub fn blur(&mut self) {
        if let RowState::Editing { focused, .. } = &mut self.state {
            *focused = false;
        }
    }
}

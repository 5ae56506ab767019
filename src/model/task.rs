use std::fmt;

/// Identifier of a task, unique within one running list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Assigned once at creation, never changed
    pub id: TaskId,
    /// Display title. Unique when added, edits may break that.
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not yet done task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// The character shown inside the completion marker `[ ]`
    pub fn marker_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}

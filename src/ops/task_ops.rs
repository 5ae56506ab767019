use chrono::Utc;

use crate::model::task::{Task, TaskId};

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task titled \"{title}\" already exists")]
    DuplicateTitle { title: String },
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Hands out task ids taken from the creation time in milliseconds.
///
/// Two adds inside the same millisecond (or a clock that steps back) would
/// otherwise share an id, so a timestamp that is not ahead of the last id
/// is bumped to `last + 1`. Ids are strictly increasing for the lifetime of
/// the generator.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> TaskId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id for a given timestamp (milliseconds since the Unix epoch)
    pub fn next_at(&mut self, now_ms: i64) -> TaskId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

// ---------------------------------------------------------------------------
// The canonical list
// ---------------------------------------------------------------------------

/// Ordered list of tasks. Insertion order is the display order and is
/// never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Exact, case-sensitive title match against every task
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    /// Append a new task. Rejected when another task already has exactly
    /// this title; the list is left untouched in that case.
    pub fn add(&mut self, id: TaskId, title: impl Into<String>) -> Result<&Task, TaskError> {
        let title = title.into();
        if self.contains_title(&title) {
            return Err(TaskError::DuplicateTitle { title });
        }
        self.tasks.push(Task::new(id, title));
        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    /// Flip the done flag. Returns false when no task has this id.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Replace the title verbatim: no uniqueness or emptiness check.
    /// Returns false when no task has this id.
    pub fn edit(&mut self, id: TaskId, new_title: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.title = new_title.into();
                true
            }
            None => false,
        }
    }

    /// Remove and return the task with this id
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list_with(titles: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for (i, title) in titles.iter().enumerate() {
            list.add(TaskId(i as i64 + 1), *title).unwrap();
        }
        list
    }

    // --- ids ---

    #[test]
    fn ids_follow_the_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), TaskId(1_000));
        assert_eq!(ids.next_at(1_005), TaskId(1_005));
    }

    #[test]
    fn same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), TaskId(1_000));
        assert_eq!(ids.next_at(1_000), TaskId(1_001));
        assert_eq!(ids.next_at(1_000), TaskId(1_002));
        // Clock catches up past the bumped ids
        assert_eq!(ids.next_at(1_010), TaskId(1_010));
    }

    #[test]
    fn clock_stepping_back_still_increases() {
        let mut ids = IdGenerator::new();
        ids.next_at(5_000);
        assert_eq!(ids.next_at(4_000), TaskId(5_001));
    }

    #[test]
    fn wall_clock_ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let generated: Vec<TaskId> = (0..100).map(|_| ids.next_id()).collect();
        assert!(generated.windows(2).all(|w| w[0] < w[1]));
    }

    // --- add ---

    #[test]
    fn add_appends_not_done() {
        let mut list = list_with(&["Walk dog"]);
        let task = list.add(TaskId(9), "Buy milk").unwrap().clone();
        assert_eq!(task, Task::new(TaskId(9), "Buy milk"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[1].title, "Buy milk");
    }

    #[test]
    fn add_duplicate_title_is_rejected() {
        let mut list = list_with(&["Buy milk"]);
        let before = list.clone();
        let err = list.add(TaskId(2), "Buy milk").unwrap_err();
        assert_eq!(
            err,
            TaskError::DuplicateTitle {
                title: "Buy milk".into()
            }
        );
        assert_eq!(list, before);
    }

    #[test]
    fn duplicate_check_is_exact() {
        let mut list = list_with(&["Buy milk"]);
        assert!(list.add(TaskId(2), "buy milk").is_ok());
        assert!(list.add(TaskId(3), "Buy milk ").is_ok());
        assert_eq!(list.len(), 3);
    }

    // --- toggle ---

    #[test]
    fn toggle_twice_restores() {
        let mut list = list_with(&["Walk dog"]);
        assert!(list.toggle_done(TaskId(1)));
        assert!(list.tasks()[0].done);
        assert!(list.toggle_done(TaskId(1)));
        assert!(!list.tasks()[0].done);
    }

    #[test]
    fn toggle_unknown_id_is_a_silent_noop() {
        let mut list = list_with(&["Walk dog", "Buy milk"]);
        let before = list.clone();
        assert!(!list.toggle_done(TaskId(42)));
        assert_eq!(list, before);
    }

    // --- edit ---

    #[test]
    fn edit_replaces_only_the_title() {
        let mut list = list_with(&["Walk dog", "Buy milk"]);
        list.toggle_done(TaskId(1));
        assert!(list.edit(TaskId(1), "Walk the dog"));
        assert_eq!(
            list.tasks()[0],
            Task {
                id: TaskId(1),
                title: "Walk the dog".into(),
                done: true,
            }
        );
        assert_eq!(list.tasks()[1], Task::new(TaskId(2), "Buy milk"));
    }

    #[test]
    fn edit_skips_validation() {
        let mut list = list_with(&["Walk dog", "Buy milk"]);
        assert!(list.edit(TaskId(2), "Walk dog"));
        assert!(list.edit(TaskId(1), ""));
        assert_eq!(list.tasks()[0].title, "");
        assert_eq!(list.tasks()[1].title, "Walk dog");
    }

    #[test]
    fn edit_unknown_id_is_a_silent_noop() {
        let mut list = list_with(&["Walk dog"]);
        let before = list.clone();
        assert!(!list.edit(TaskId(42), "Nope"));
        assert_eq!(list, before);
    }

    // --- remove ---

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut list = list_with(&["A", "B", "C"]);
        let removed = list.remove(TaskId(2)).unwrap();
        assert_eq!(removed.title, "B");
        let titles: Vec<&str> = list.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn remove_unknown_id_is_a_silent_noop() {
        let mut list = list_with(&["A"]);
        assert_eq!(list.remove(TaskId(42)), None);
        assert_eq!(list.len(), 1);
    }
}

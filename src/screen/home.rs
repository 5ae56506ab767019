use tracing::{debug, info, warn};

use crate::model::locale::Locale;
use crate::model::task::TaskId;
use crate::ops::task_ops::{IdGenerator, TaskError, TaskList};

use super::prompt::{ButtonStyle, Continuation, Prompt, PromptButton, Prompter};
use super::row::TaskActions;

/// Owner of the canonical task list.
///
/// Rows and the input bar only ask for changes; this is the one place
/// that performs them.
#[derive(Debug, Default)]
pub struct HomeScreen {
    tasks: TaskList,
    ids: IdGenerator,
    locale: Locale,
}

impl HomeScreen {
    pub fn new(locale: Locale) -> Self {
        HomeScreen {
            tasks: TaskList::new(),
            ids: IdGenerator::new(),
            locale,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of tasks, shown by the header
    pub fn tasks_counter(&self) -> usize {
        self.tasks.len()
    }

    /// Add a task. A title already in the list is refused with a notice
    /// and the list stays as it was.
    pub fn add_task(&mut self, title: &str, prompter: &mut impl Prompter) -> Option<TaskId> {
        let id = self.ids.next_id();
        match self.tasks.add(id, title) {
            Ok(task) => {
                info!(task_id = %task.id, title = %task.title, "task added");
                Some(task.id)
            }
            Err(TaskError::DuplicateTitle { title }) => {
                warn!(%title, "refused duplicate task title");
                let m = self.locale.messages();
                prompter.present(Prompt::notice(
                    m.duplicate_title,
                    m.duplicate_body,
                    m.acknowledge,
                ));
                None
            }
        }
    }

    pub fn toggle_task_done(&mut self, id: TaskId) {
        if self.tasks.toggle_done(id) {
            info!(task_id = %id, "task toggled");
        } else {
            debug!(task_id = %id, "toggle ignored: no such task");
        }
    }

    pub fn edit_task(&mut self, id: TaskId, new_title: String) {
        if self.tasks.edit(id, new_title) {
            info!(task_id = %id, "task edited");
        } else {
            debug!(task_id = %id, "edit ignored: no such task");
        }
    }

    /// Ask for confirmation; only the confirm button removes the task.
    pub fn remove_task(&mut self, id: TaskId, prompter: &mut impl Prompter) {
        let m = self.locale.messages();
        let prompt = Prompt::new(m.remove_title, m.remove_body)
            .button(PromptButton::new(m.remove_cancel, ButtonStyle::Cancel))
            .button(
                PromptButton::new(m.remove_confirm, ButtonStyle::Default).on_select(
                    move |tasks: &mut TaskList| match tasks.remove(id) {
                        Some(task) => info!(task_id = %id, title = %task.title, "task removed"),
                        None => debug!(task_id = %id, "remove ignored: no such task"),
                    },
                ),
            );
        debug!(task_id = %id, "removal awaiting confirmation");
        prompter.present(prompt);
    }

    /// Run a resolved prompt's continuation against the current list
    pub fn apply(&mut self, continuation: Continuation) {
        continuation(&mut self.tasks);
    }

    /// Bind a prompter so rows can call back into the screen
    pub fn actions<'a, P: Prompter>(&'a mut self, prompter: &'a mut P) -> ScreenActions<'a, P> {
        ScreenActions {
            screen: self,
            prompter,
        }
    }
}

/// The screen plus the prompter it needs, as seen by the rows
pub struct ScreenActions<'a, P: Prompter> {
    screen: &'a mut HomeScreen,
    prompter: &'a mut P,
}

impl<P: Prompter> TaskActions for ScreenActions<'_, P> {
    fn toggle_task_done(&mut self, id: TaskId) {
        self.screen.toggle_task_done(id);
    }

    fn edit_task(&mut self, id: TaskId, new_title: String) {
        self.screen.edit_task(id, new_title);
    }

    fn remove_task(&mut self, id: TaskId) {
        self.screen.remove_task(id, &mut *self.prompter);
    }
}

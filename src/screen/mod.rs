//! Terminal-independent screen logic: the canonical list owner, the rows
//! and their edit state, and the prompt contract.

pub mod field;
pub mod home;
pub mod list;
pub mod prompt;
pub mod row;

pub use field::TextField;
pub use home::{HomeScreen, ScreenActions};
pub use list::TaskListView;
pub use prompt::{ButtonStyle, Continuation, Prompt, PromptButton, Prompter};
pub use row::{RowState, TaskActions, TaskRow};

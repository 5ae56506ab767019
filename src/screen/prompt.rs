//! Modal prompts and the continuations they resolve to.
//!
//! A prompt is registered with a [`Prompter`] and answered later. Each
//! button may carry a continuation that runs against the canonical list at
//! the moment the user picks it; until then nothing changes.

use std::fmt;

use crate::ops::task_ops::TaskList;

/// Deferred work attached to a prompt button
pub type Continuation = Box<dyn FnOnce(&mut TaskList)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Default,
    /// Dismisses the prompt; picked by Esc
    Cancel,
}

pub struct PromptButton {
    pub label: String,
    pub style: ButtonStyle,
    on_select: Option<Continuation>,
}

impl PromptButton {
    pub fn new(label: impl Into<String>, style: ButtonStyle) -> Self {
        PromptButton {
            label: label.into(),
            style,
            on_select: None,
        }
    }

    pub fn on_select(mut self, continuation: impl FnOnce(&mut TaskList) + 'static) -> Self {
        self.on_select = Some(Box::new(continuation));
        self
    }

    pub fn has_action(&self) -> bool {
        self.on_select.is_some()
    }
}

impl fmt::Debug for PromptButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptButton")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("has_action", &self.has_action())
            .finish()
    }
}

/// A title, a body and the buttons that answer it
#[derive(Debug)]
pub struct Prompt {
    pub title: String,
    pub body: String,
    pub buttons: Vec<PromptButton>,
}

impl Prompt {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Prompt {
            title: title.into(),
            body: body.into(),
            buttons: Vec::new(),
        }
    }

    pub fn button(mut self, button: PromptButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// A blocking notice with a single acknowledgement and no effect
    pub fn notice(title: impl Into<String>, body: impl Into<String>, ack: &str) -> Self {
        Prompt::new(title, body).button(PromptButton::new(ack, ButtonStyle::Default))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.label.as_str()).collect()
    }

    /// The button Esc should pick: the cancel-styled one, or the only one
    pub fn cancel_index(&self) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.style == ButtonStyle::Cancel)
            .or(if self.buttons.len() == 1 { Some(0) } else { None })
    }

    /// First button whose label starts with `c`, ignoring case
    pub fn index_for_key(&self, c: char) -> Option<usize> {
        let wanted: Vec<char> = c.to_lowercase().collect();
        self.buttons.iter().position(|b| {
            let first: Vec<char> = b
                .label
                .chars()
                .next()
                .map(|f| f.to_lowercase().collect())
                .unwrap_or_default();
            first == wanted
        })
    }

    /// Answer the prompt with the button at `index`, consuming it.
    ///
    /// Returns the button's continuation, if it has one. An out-of-range
    /// index answers nothing.
    pub fn select(mut self, index: usize) -> Option<Continuation> {
        if index >= self.buttons.len() {
            return None;
        }
        self.buttons.swap_remove(index).on_select
    }

    /// Answer the prompt with the button labeled `label`
    pub fn select_label(self, label: &str) -> Option<Continuation> {
        let index = self.buttons.iter().position(|b| b.label == label)?;
        self.select(index)
    }
}

/// Host capability that shows a prompt and resolves it later
pub trait Prompter {
    fn present(&mut self, prompt: Prompt);
}

/// Keeps every prompt in order, handy for driving the screen headless
impl Prompter for Vec<Prompt> {
    fn present(&mut self, prompt: Prompt) {
        self.push(prompt);
    }
}

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::AppConfig;
use crate::model::task::Task;
use crate::screen::{HomeScreen, Prompt, Prompter, TaskListView, TextField};

use super::input;
use super::render;
use super::theme::Theme;

/// Where typed keys go when no prompt is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The cursor row of the task list
    List,
    /// The new-task input bar
    NewTask,
}

/// The modal prompt currently on screen, plus the highlighted button
#[derive(Debug, Default)]
pub struct PromptSlot {
    pub prompt: Option<Prompt>,
    pub choice: usize,
}

impl PromptSlot {
    pub fn is_open(&self) -> bool {
        self.prompt.is_some()
    }
}

impl Prompter for PromptSlot {
    fn present(&mut self, prompt: Prompt) {
        if let Some(old) = &self.prompt {
            debug!(title = %old.title, "unanswered prompt replaced");
        }
        // Start on the harmless answer
        self.choice = prompt.cancel_index().unwrap_or(0);
        self.prompt = Some(prompt);
    }
}

/// Main application state
pub struct App {
    pub screen: HomeScreen,
    pub list_view: TaskListView,
    pub input: TextField,
    pub focus: Focus,
    pub prompt: PromptSlot,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            screen: HomeScreen::new(config.ui.locale),
            list_view: TaskListView::new(),
            input: TextField::new(),
            focus: Focus::NewTask,
            prompt: PromptSlot::default(),
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            should_quit: false,
        }
    }

    /// Reconcile rows with the canonical list after a change
    pub fn sync_rows(&mut self) {
        self.list_view.sync(self.screen.tasks().tasks());
        if self.focus == Focus::NewTask {
            self.list_view.blur_all();
        }
    }

    /// The task under the list cursor
    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.list_view.selected_id()?;
        self.screen.tasks().get(id)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::List => self.list_view.refocus(),
            Focus::NewTask => self.list_view.blur_all(),
        }
    }

    /// Send the input bar's text to add. Blank input is ignored; a
    /// refused title stays in the bar so it can be corrected.
    pub fn submit_new_task(&mut self) {
        if self.input.text().trim().is_empty() {
            return;
        }
        let title = self.input.text().to_string();
        if self.screen.add_task(&title, &mut self.prompt).is_some() {
            self.input.clear();
            self.sync_rows();
            self.list_view.jump_to_bottom();
            if self.focus == Focus::NewTask {
                self.list_view.blur_all();
            }
        }
    }

    /// Answer the open prompt with the button at `index`
    pub fn resolve_prompt(&mut self, index: usize) {
        let Some(prompt) = self.prompt.prompt.take() else {
            return;
        };
        debug!(title = %prompt.title, index, "prompt answered");
        if let Some(continuation) = prompt.select(index) {
            self.screen.apply(continuation);
            self.sync_rows();
        }
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    app.sync_rows();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!(locale = ?config.ui.locale, "session started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.screen.tasks_counter(), "session ended");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

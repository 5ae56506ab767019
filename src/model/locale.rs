use serde::{Deserialize, Serialize};

/// Language of the user-facing prompt strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

/// The literal strings shown by the prompts and chrome of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub duplicate_title: &'static str,
    pub duplicate_body: &'static str,
    pub acknowledge: &'static str,
    pub remove_title: &'static str,
    pub remove_body: &'static str,
    pub remove_cancel: &'static str,
    pub remove_confirm: &'static str,
    pub input_placeholder: &'static str,
    pub empty_list: &'static str,
}

const PT: Messages = Messages {
    duplicate_title: "Task já cadastrada",
    duplicate_body: "Você não pode cadastrar uma task com o mesmo nome",
    acknowledge: "OK",
    remove_title: "Remover item",
    remove_body: "Tem certeza que você deseja remover esse item?",
    remove_cancel: "Não",
    remove_confirm: "Sim",
    input_placeholder: "Adicionar novo todo...",
    empty_list: "Nenhuma tarefa cadastrada",
};

const EN: Messages = Messages {
    duplicate_title: "Task already registered",
    duplicate_body: "You cannot register a task with the same name",
    acknowledge: "OK",
    remove_title: "Remove item",
    remove_body: "Are you sure you want to remove this item?",
    remove_cancel: "No",
    remove_confirm: "Yes",
    input_placeholder: "Add new todo...",
    empty_list: "No tasks yet",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Pt => &PT,
            Locale::En => &EN,
        }
    }

    /// Header counter text, e.g. "Você tem 3 tarefas"
    pub fn counter(self, count: usize) -> String {
        match self {
            Locale::Pt => {
                let noun = if count == 1 { "tarefa" } else { "tarefas" };
                format!("Você tem {} {}", count, noun)
            }
            Locale::En => {
                let noun = if count == 1 { "task" } else { "tasks" };
                format!("You have {} {}", count, noun)
            }
        }
    }
}

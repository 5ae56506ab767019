use pretty_assertions::assert_eq;
use tasklist::model::Locale;
use tasklist::screen::{HomeScreen, Prompt, RowState, TaskActions, TaskListView};

/// Helper: titles and done flags in display order
fn snapshot(screen: &HomeScreen) -> Vec<(String, bool)> {
    screen
        .tasks()
        .tasks()
        .iter()
        .map(|t| (t.title.clone(), t.done))
        .collect()
}

fn screen_with(titles: &[&str]) -> (HomeScreen, Vec<Prompt>) {
    let mut screen = HomeScreen::new(Locale::Pt);
    let mut prompts: Vec<Prompt> = Vec::new();
    for title in titles {
        screen.add_task(title, &mut prompts).unwrap();
    }
    assert!(prompts.is_empty());
    (screen, prompts)
}

/// Answer the oldest open prompt by label and apply what it does
fn answer(screen: &mut HomeScreen, prompts: &mut Vec<Prompt>, label: &str) {
    let prompt = prompts.remove(0);
    assert!(
        prompt.labels().contains(&label),
        "no button {:?} in {:?}",
        label,
        prompt.labels()
    );
    if let Some(continuation) = prompt.select_label(label) {
        screen.apply(continuation);
    }
}

#[test]
fn adding_a_duplicate_title_is_refused_with_a_notice() {
    let (mut screen, mut prompts) = screen_with(&[]);

    screen.add_task("Buy milk", &mut prompts).unwrap();
    assert_eq!(snapshot(&screen), vec![("Buy milk".to_string(), false)]);

    assert_eq!(screen.add_task("Buy milk", &mut prompts), None);
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].title, "Task já cadastrada");
    assert_eq!(
        prompts[0].body,
        "Você não pode cadastrar uma task com o mesmo nome"
    );
    assert_eq!(screen.tasks_counter(), 1);

    // Acknowledging the notice changes nothing
    answer(&mut screen, &mut prompts, "OK");
    assert_eq!(screen.tasks_counter(), 1);
}

#[test]
fn toggling_done_flips_back_and_forth() {
    let (mut screen, _) = screen_with(&["Walk dog"]);
    let id = screen.tasks().tasks()[0].id;

    screen.toggle_task_done(id);
    assert!(screen.tasks().get(id).unwrap().done);
    screen.toggle_task_done(id);
    assert!(!screen.tasks().get(id).unwrap().done);
}

#[test]
fn editing_keeps_the_id() {
    let (mut screen, _) = screen_with(&["Walk dog"]);
    let id = screen.tasks().tasks()[0].id;

    screen.edit_task(id, "Walk the dog".to_string());
    let task = screen.tasks().get(id).unwrap();
    assert_eq!(task.title, "Walk the dog");
    assert_eq!(task.id, id);
}

#[test]
fn removal_waits_for_the_confirm_button() {
    let (mut screen, mut prompts) = screen_with(&["Walk dog", "Buy milk"]);
    let first = screen.tasks().tasks()[0].id;
    let second = screen.tasks().tasks()[1].id;

    screen.remove_task(first, &mut prompts);
    // Nothing happens until the prompt is answered
    assert_eq!(screen.tasks_counter(), 2);
    assert_eq!(prompts[0].title, "Remover item");
    assert_eq!(
        prompts[0].body,
        "Tem certeza que você deseja remover esse item?"
    );
    assert_eq!(prompts[0].labels(), vec!["Não", "Sim"]);
    answer(&mut screen, &mut prompts, "Sim");
    assert_eq!(snapshot(&screen), vec![("Buy milk".to_string(), false)]);

    screen.remove_task(second, &mut prompts);
    answer(&mut screen, &mut prompts, "Não");
    assert_eq!(snapshot(&screen), vec![("Buy milk".to_string(), false)]);
}

#[test]
fn unknown_ids_are_ignored() {
    let (mut screen, mut prompts) = screen_with(&["Walk dog"]);
    let id = screen.tasks().tasks()[0].id;
    screen.remove_task(id, &mut prompts);
    answer(&mut screen, &mut prompts, "Sim");
    assert!(screen.tasks().is_empty());

    screen.toggle_task_done(id);
    screen.edit_task(id, "Ghost".to_string());
    screen.remove_task(id, &mut prompts);
    answer(&mut screen, &mut prompts, "Sim");
    assert!(screen.tasks().is_empty());
}

#[test]
fn row_edit_cycle_through_the_screen() {
    let (mut screen, mut prompts) = screen_with(&["Walk dog", "Buy milk"]);
    let mut view = TaskListView::new();
    view.sync(screen.tasks().tasks());
    let task = screen.tasks().tasks()[0].clone();

    // Cancel discards the draft without editing
    assert!(view.start_editing(&task));
    let draft = view.row_mut(task.id).unwrap().draft_mut().unwrap();
    assert_eq!(draft.text(), "Walk dog");
    draft.set("Something else");
    assert!(view.cancel_editing(task.id));
    assert_eq!(screen.tasks().get(task.id).unwrap().title, "Walk dog");

    // Remove is refused while editing
    view.start_editing(&task);
    {
        let mut actions = screen.actions(&mut prompts);
        assert!(!view.remove(task.id, &mut actions));
    }
    assert!(prompts.is_empty());

    // An empty draft is committed as-is
    view.row_mut(task.id).unwrap().draft_mut().unwrap().clear();
    {
        let mut actions = screen.actions(&mut prompts);
        assert!(view.submit_editing(task.id, &mut actions));
    }
    assert_eq!(screen.tasks().get(task.id).unwrap().title, "");
    assert_eq!(view.row(task.id).unwrap().state(), &RowState::Viewing);
}

#[test]
fn edit_may_duplicate_a_title() {
    let (mut screen, mut prompts) = screen_with(&["Walk dog", "Buy milk"]);
    let id = screen.tasks().tasks()[1].id;
    screen.actions(&mut prompts).edit_task(id, "Walk dog".to_string());
    assert_eq!(
        snapshot(&screen),
        vec![
            ("Walk dog".to_string(), false),
            ("Walk dog".to_string(), false),
        ]
    );
    // Add still checks against the current titles
    assert_eq!(screen.add_task("Walk dog", &mut prompts), None);
    assert_eq!(prompts.len(), 1);
}

#[test]
fn removed_rows_drop_their_edit_state() {
    let (mut screen, mut prompts) = screen_with(&["Walk dog", "Buy milk"]);
    let mut view = TaskListView::new();
    view.sync(screen.tasks().tasks());
    let second = screen.tasks().tasks()[1].clone();

    view.start_editing(&second);
    let first = screen.tasks().tasks()[0].id;
    screen.remove_task(second.id, &mut prompts);
    answer(&mut screen, &mut prompts, "Sim");
    view.sync(screen.tasks().tasks());

    assert_eq!(view.len(), 1);
    assert!(view.row(second.id).is_none());
    assert!(!view.row(first).unwrap().is_editing());
}

#[test]
fn english_locale_uses_english_prompts() {
    let mut screen = HomeScreen::new(Locale::En);
    let mut prompts: Vec<Prompt> = Vec::new();
    let id = screen.add_task("Walk dog", &mut prompts).unwrap();
    screen.remove_task(id, &mut prompts);
    assert_eq!(prompts[0].labels(), vec!["No", "Yes"]);
    assert_eq!(Locale::En.counter(screen.tasks_counter()), "You have 1 task");
}

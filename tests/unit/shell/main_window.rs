use super::*;

fn window() -> MainWindow {
    MainWindow::new(&Settings::default())
}

fn type_str(window: &mut MainWindow, text: &str) {
    for c in text.chars() {
        window.handle_input(InputKey::Char(c));
    }
}

#[test]
fn builds_every_named_widget() {
    let window = window();
    for name in [
        "root",
        "toolbar_container",
        "main_paned",
        "left_panel",
        "navigation_tree",
        "right_panel",
        "text_container",
        "text_area",
        "text_scrollbar",
        "status_container",
        "status_label",
        "progress_bar",
    ] {
        assert!(window.registry().lookup(name).is_some(), "missing {name}");
    }
    assert!(window.menubar().is_some());
    assert!(window.toolbar().is_some());
    assert_eq!(window.title(), "Cowriter");
}

#[test]
fn starts_with_placeholder_content() {
    let window = window();
    assert!(window.text().starts_with("Welcome to Cowriter!"));
    assert_eq!(window.status_text().as_deref(), Some("Ready"));

    let nav = window.registry().lookup("navigation_tree").unwrap();
    match &window.tree().get(nav).unwrap().kind {
        WidgetKind::TreeView { items } => {
            let labels: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
            assert_eq!(labels, ["Project", "Documents", "Settings"]);
            assert!(items[0].open);
        }
        other => panic!("expected tree view, got {other:?}"),
    }
}

#[test]
fn scrollbar_is_wired_to_the_text_area() {
    let window = window();
    let text_key = window.registry().lookup("text_area").unwrap();
    let scrollbar_key = window.registry().lookup("text_scrollbar").unwrap();

    match &window.tree().get(scrollbar_key).unwrap().kind {
        WidgetKind::Scrollbar { target, thumb, .. } => {
            assert_eq!(*target, Some(text_key));
            let lines = window.tree().text_area(text_key).unwrap().line_count();
            assert_eq!(thumb.total, lines);
        }
        other => panic!("expected scrollbar, got {other:?}"),
    }
}

#[test]
fn new_file_clears_text_and_reports() {
    let mut window = window();
    assert!(window.invoke(CommandId::NewFile));
    assert!(window.text().is_empty());
    assert_eq!(window.current_file(), None);
    assert_eq!(window.status_text().as_deref(), Some("New file created"));
}

#[test]
fn stub_commands_resolve_absent() {
    let mut window = window();
    for id in [
        CommandId::Find,
        CommandId::Replace,
        CommandId::ZoomIn,
        CommandId::ShowAbout,
        CommandId::ExitApp,
    ] {
        assert!(!window.invoke(id), "{} should have no handler", id.name());
    }
}

#[test]
fn clipboard_cycle() {
    let mut window = window();
    window.invoke(CommandId::NewFile);
    type_str(&mut window, "abc");

    window.invoke(CommandId::SelectAll);
    window.invoke(CommandId::Copy);
    assert_eq!(window.status_text().as_deref(), Some("Copied to clipboard"));

    // Pasting over the live selection replaces it.
    window.invoke(CommandId::Paste);
    assert_eq!(window.text(), "abc");
    assert_eq!(window.status_text().as_deref(), Some("Pasted from clipboard"));

    // Without a selection, paste appends.
    window.invoke(CommandId::Paste);
    assert_eq!(window.text(), "abcabc");
}

#[test]
fn cut_removes_the_selection() {
    let mut window = window();
    window.invoke(CommandId::NewFile);
    type_str(&mut window, "abc");

    window.invoke(CommandId::SelectAll);
    window.invoke(CommandId::Cut);
    assert!(window.text().is_empty());
    assert_eq!(window.status_text().as_deref(), Some("Cut to clipboard"));

    window.invoke(CommandId::Paste);
    assert_eq!(window.text(), "abc");
}

#[test]
fn copy_without_selection_is_a_no_op() {
    let mut window = window();
    window.invoke(CommandId::NewFile);
    type_str(&mut window, "abc");
    window.invoke(CommandId::Copy);
    window.invoke(CommandId::Paste);
    assert_eq!(window.text(), "abc");
}

#[test]
fn toggle_theme_flips_and_reports() {
    let mut window = window();
    assert_eq!(window.theme(), ThemeKind::Dark);
    window.invoke(CommandId::ToggleTheme);
    assert_eq!(window.theme(), ThemeKind::Light);
    assert_eq!(window.status_text().as_deref(), Some("Switched to light theme"));
}

#[test]
fn save_prompt_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut window = window();
    window.invoke(CommandId::NewFile);
    type_str(&mut window, "saved content");

    window.invoke(CommandId::SaveFile);
    assert_eq!(window.prompt().map(|p| p.kind), Some(PromptKind::Save));

    type_str(&mut window, &path.display().to_string());
    window.handle_input(InputKey::Enter);

    assert!(window.prompt().is_none());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "saved content");
    assert_eq!(window.current_file(), Some(path.as_path()));
    assert!(window
        .status_text()
        .is_some_and(|s| s.starts_with("Saved:")));
}

#[test]
fn save_prompt_prefills_the_current_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut window = window();
    window.invoke(CommandId::SaveFile);
    type_str(&mut window, &path.display().to_string());
    window.handle_input(InputKey::Enter);

    window.invoke(CommandId::SaveFile);
    assert_eq!(
        window.prompt().map(|p| p.input.clone()),
        Some(path.display().to_string())
    );
}

#[test]
fn open_prompt_loads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "from disk").unwrap();

    let mut window = window();
    window.invoke(CommandId::OpenFile);
    assert_eq!(window.prompt().map(|p| p.kind), Some(PromptKind::Open));

    type_str(&mut window, &path.display().to_string());
    window.handle_input(InputKey::Enter);

    assert_eq!(window.text(), "from disk");
    assert_eq!(window.current_file(), Some(path.as_path()));
    assert!(window
        .status_text()
        .is_some_and(|s| s.starts_with("Opened:")));
}

#[test]
fn open_failure_raises_a_modal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let mut window = window();
    window.invoke(CommandId::OpenFile);
    type_str(&mut window, &path.display().to_string());
    window.handle_input(InputKey::Enter);

    let modal = window.modal().expect("modal should be raised");
    assert_eq!(modal.title, "Error");
    assert!(modal.message.starts_with("Failed to open file:"));

    // Any key dismisses it.
    window.handle_input(InputKey::Char('x'));
    assert!(window.modal().is_none());
}

#[test]
fn esc_cancels_the_prompt() {
    let mut window = window();
    window.invoke(CommandId::OpenFile);
    type_str(&mut window, "somewhere");
    window.handle_input(InputKey::Esc);
    assert!(window.prompt().is_none());
}

#[test]
fn empty_prompt_input_is_discarded() {
    let mut window = window();
    window.invoke(CommandId::OpenFile);
    type_str(&mut window, "   ");
    window.handle_input(InputKey::Enter);
    assert!(window.prompt().is_none());
    assert!(window.modal().is_none());
}

#[test]
fn typing_edits_the_text_area() {
    let mut window = window();
    window.invoke(CommandId::NewFile);
    type_str(&mut window, "hi");
    window.handle_input(InputKey::Enter);
    type_str(&mut window, "there");
    window.handle_input(InputKey::Backspace);
    assert_eq!(window.text(), "hi\nther");
}

#[test]
fn chords_run_bound_commands() {
    let mut window = window();
    type_str(&mut window, "x");
    window.handle_chord(KeyChord::ctrl('n'));
    assert!(window.text().is_empty());
    assert_eq!(window.status_text().as_deref(), Some("New file created"));
}

#[test]
fn chords_are_ignored_while_a_prompt_is_open() {
    let mut window = window();
    type_str(&mut window, "keep");
    window.invoke(CommandId::OpenFile);
    window.handle_chord(KeyChord::ctrl('n'));
    window.handle_input(InputKey::Esc);
    assert!(window.text().ends_with("keep"));
}

#[test]
fn activating_toolbar_buttons_runs_their_commands() {
    let mut window = window();
    type_str(&mut window, "x");

    let toolbar = window.toolbar().unwrap();
    let new_button = window
        .tree()
        .children(toolbar)
        .iter()
        .copied()
        .find(|&key| window.tree().get(key).unwrap().command == Some(CommandId::NewFile))
        .unwrap();

    assert!(window.activate(new_button));
    assert!(window.text().is_empty());
}

#[test]
fn activating_disabled_stub_buttons_is_a_no_op() {
    let mut window = window();

    // Menu entries for stub commands come out disabled.
    let menubar = window.menubar().unwrap();
    let edit = window.tree().children(menubar)[1];
    let find = window
        .tree()
        .children(edit)
        .iter()
        .copied()
        .find(|&key| window.tree().get(key).unwrap().command == Some(CommandId::Find))
        .unwrap();

    assert!(!window.tree().get(find).unwrap().enabled);
    assert!(!window.activate(find));
}

#[test]
fn invoking_edit_commands_refreshes_the_scrollbar() {
    let mut window = window();
    window.invoke(CommandId::NewFile);
    type_str(&mut window, "a");
    window.handle_input(InputKey::Enter);
    type_str(&mut window, "b");

    let thumb_total = |window: &MainWindow| {
        let key = window.registry().lookup("text_scrollbar").unwrap();
        match &window.tree().get(key).unwrap().kind {
            WidgetKind::Scrollbar { thumb, .. } => thumb.total,
            _ => panic!("expected scrollbar"),
        }
    };
    assert_eq!(thumb_total(&window), 2);

    window.invoke(CommandId::SelectAll);
    window.invoke(CommandId::Cut);
    assert_eq!(thumb_total(&window), 1);
}

#[test]
fn progress_bar_toggles() {
    let mut window = window();
    let key = window.registry().lookup("progress_bar").unwrap();

    let running = |window: &MainWindow| match window.tree().get(key).unwrap().kind {
        WidgetKind::Progressbar { running, .. } => running,
        _ => panic!("expected progressbar"),
    };

    assert!(!running(&window));
    window.show_progress();
    assert!(running(&window));
    window.hide_progress();
    assert!(!running(&window));
}

#[test]
fn quit_is_requested_not_immediate() {
    let mut window = window();
    assert!(!window.should_quit());
    window.request_quit();
    assert!(window.should_quit());
}

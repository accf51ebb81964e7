use super::*;

fn frame() -> Widget {
    Widget::new(WidgetKind::Frame)
}

#[test]
fn insert_links_parent_and_children() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(None, frame());
    let a = tree.insert(Some(root), frame());
    let b = tree.insert(Some(root), frame());

    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.children(root), &[a, b]);
    assert_eq!(tree.get(a).unwrap().parent, Some(root));
    assert_eq!(tree.len(), 3);
    assert!(tree.contains(b));
}

#[test]
fn first_parentless_insert_becomes_root() {
    let mut tree = WidgetTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);

    let first = tree.insert(None, frame());
    let second = tree.insert(None, frame());
    assert_eq!(tree.root(), Some(first));
    assert_ne!(tree.root(), Some(second));
}

#[test]
fn activate_requires_enabled_and_command() {
    let mut tree = WidgetTree::new();

    let mut armed = Widget::new(WidgetKind::Button {
        text: "New".to_string(),
    });
    armed.command = Some(CommandId::NewFile);
    let armed = tree.insert(None, armed);

    let mut disabled = Widget::new(WidgetKind::Button {
        text: "Find".to_string(),
    });
    disabled.command = Some(CommandId::Find);
    disabled.enabled = false;
    let disabled = tree.insert(Some(armed), disabled);

    let bare = tree.insert(Some(armed), frame());

    assert_eq!(tree.activate(armed), Some(CommandId::NewFile));
    assert_eq!(tree.activate(disabled), None);
    assert_eq!(tree.activate(bare), None);
}

#[test]
fn text_area_editing() {
    let mut state = TextAreaState::new(Wrap::Word);
    assert!(state.is_empty());

    state.set_text("hello");
    state.append(" world");
    assert_eq!(state.text(), "hello world");

    state.pop_char();
    assert_eq!(state.text(), "hello worl");

    state.clear();
    assert!(state.is_empty());
    state.pop_char();
    assert!(state.is_empty());
}

#[test]
fn text_area_selection() {
    let mut state = TextAreaState::new(Wrap::Word);
    state.set_text("content");
    assert!(!state.has_selection());
    assert_eq!(state.selected_text(), None);

    state.select_all();
    assert!(state.has_selection());
    assert_eq!(state.selected_text().as_deref(), Some("content"));

    let taken = state.take_selection();
    assert_eq!(taken.as_deref(), Some("content"));
    assert!(state.is_empty());
    assert!(!state.has_selection());
}

#[test]
fn set_text_resets_scroll_and_selection() {
    let mut state = TextAreaState::new(Wrap::Word);
    state.set_text("a\nb\nc\nd");
    state.select_all();
    state.scroll_to(2);

    state.set_text("fresh");
    assert_eq!(state.scroll, 0);
    assert!(!state.has_selection());
}

#[test]
fn scroll_clamps_to_line_count() {
    let mut state = TextAreaState::new(Wrap::None);
    state.set_text("1\n2\n3");
    assert_eq!(state.line_count(), 3);

    state.scroll_to(100);
    assert_eq!(state.scroll, 2);

    state.scroll_by(-100);
    assert_eq!(state.scroll, 0);

    state.scroll_by(1);
    assert_eq!(state.scroll, 1);
}

#[test]
fn text_area_accessor_rejects_other_kinds() {
    let mut tree = WidgetTree::new();
    let text = tree.insert(None, Widget::new(WidgetKind::Text(TextAreaState::new(Wrap::Word))));
    let label = tree.insert(
        Some(text),
        Widget::new(WidgetKind::Label {
            text: "Ready".to_string(),
        }),
    );

    assert!(tree.text_area(text).is_some());
    assert!(tree.text_area(label).is_none());

    tree.text_area_mut(text).unwrap().set_text("x");
    assert_eq!(tree.text_area(text).unwrap().text(), "x");
}

#[test]
fn kind_names() {
    assert_eq!(WidgetKind::Frame.kind_name(), "frame");
    assert_eq!(
        WidgetKind::Paned {
            orient: Orientation::Horizontal
        }
        .kind_name(),
        "panedwindow"
    );
    assert_eq!(WidgetKind::MenuSeparator.kind_name(), "menuseparator");
}

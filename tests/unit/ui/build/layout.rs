use super::*;

use crate::commands::CommandId;
use crate::config::layout::{default_window_layout, Side};
use crate::config::Orientation;

struct Host;

fn noop(_: &mut Host) {}

fn empty_table() -> CommandTable<Host> {
    CommandTable::new()
}

fn build(
    table: &CommandTable<Host>,
    config: &LayoutConfig,
) -> (WidgetTree, WidgetRegistry, Option<WidgetKey>) {
    let mut tree = WidgetTree::new();
    let mut registry = WidgetRegistry::new();
    let key = LayoutBuilder::new(table).build(&mut tree, &mut registry, None, config);
    (tree, registry, key)
}

#[test]
fn default_layout_registers_all_names() {
    let table = empty_table();
    let layout = default_window_layout();
    let (tree, registry, root) = build(&table, &layout.root);

    assert_eq!(tree.root(), root);
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
        assert!(registry.lookup(name).is_some(), "missing {name}");
    }

    let text = registry.lookup("text_area").unwrap();
    assert!(matches!(tree.get(text).unwrap().kind, WidgetKind::Text(_)));
    let scrollbar = registry.lookup("text_scrollbar").unwrap();
    assert!(matches!(
        tree.get(scrollbar).unwrap().kind,
        WidgetKind::Scrollbar {
            orient: Orientation::Vertical,
            ..
        }
    ));
}

#[test]
fn hidden_subtree_never_reaches_tree_or_registry() {
    let table = empty_table();
    let config = LayoutConfig::new(NodeKind::Frame).named("root").children(vec![
        LayoutConfig::new(NodeKind::Frame)
            .named("ghost")
            .hidden()
            .children(vec![LayoutConfig::new(NodeKind::TreeView).named("ghost_child")]),
        LayoutConfig::new(NodeKind::Frame).named("kept"),
    ]);

    let (tree, registry, _) = build(&table, &config);
    assert_eq!(tree.len(), 2);
    assert!(registry.lookup("ghost").is_none());
    assert!(registry.lookup("ghost_child").is_none());
    assert!(registry.lookup("kept").is_some());
}

#[test]
fn paned_children_attach_with_weights() {
    let table = empty_table();
    let config = LayoutConfig::new(NodeKind::Paned {
        orient: Orientation::Horizontal,
    })
    .children(vec![
        LayoutConfig::new(NodeKind::Frame).named("left").weight(1),
        LayoutConfig::new(NodeKind::Frame).named("right").weight(3),
    ]);

    let (tree, registry, _) = build(&table, &config);
    let left = registry.lookup("left").unwrap();
    let right = registry.lookup("right").unwrap();
    assert_eq!(tree.get(left).unwrap().attach, Attach::PanedChild { weight: 1 });
    assert_eq!(tree.get(right).unwrap().attach, Attach::PanedChild { weight: 3 });
}

#[test]
fn packed_children_carry_placement_hints() {
    let table = empty_table();
    let config = LayoutConfig::new(NodeKind::Frame).children(vec![LayoutConfig::new(
        NodeKind::Label {
            text: "Ready".to_string(),
        },
    )
    .named("status")
    .side(Side::Left)]);

    let (tree, registry, _) = build(&table, &config);
    let status = registry.lookup("status").unwrap();
    match tree.get(status).unwrap().attach {
        Attach::Packed(placement) => assert_eq!(placement.side, Side::Left),
        other => panic!("expected packed attach, got {other:?}"),
    }
}

#[test]
fn button_with_unresolved_command_is_built_disabled() {
    let mut table = empty_table();
    table.register(CommandId::NewFile, noop);

    let config = LayoutConfig::new(NodeKind::Frame).children(vec![
        LayoutConfig::new(NodeKind::Button {
            text: "New".to_string(),
            command: Some(CommandId::NewFile),
        })
        .named("new"),
        LayoutConfig::new(NodeKind::Button {
            text: "Find".to_string(),
            command: Some(CommandId::Find),
        })
        .named("find"),
    ]);

    let (tree, registry, _) = build(&table, &config);
    let new = tree.get(registry.lookup("new").unwrap()).unwrap();
    let find = tree.get(registry.lookup("find").unwrap()).unwrap();

    assert!(new.enabled);
    assert_eq!(new.command, Some(CommandId::NewFile));
    assert!(!find.enabled);
    assert_eq!(find.command, Some(CommandId::Find));
}

#[test]
fn duplicate_names_resolve_to_the_last_widget() {
    let table = empty_table();
    let config = LayoutConfig::new(NodeKind::Frame).children(vec![
        LayoutConfig::new(NodeKind::Frame).named("twin"),
        LayoutConfig::new(NodeKind::TreeView).named("twin"),
    ]);

    let (tree, registry, _) = build(&table, &config);
    let key = registry.lookup("twin").unwrap();
    assert!(matches!(
        tree.get(key).unwrap().kind,
        WidgetKind::TreeView { .. }
    ));
}

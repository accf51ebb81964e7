//! 布局构建器：把 LayoutConfig 树变成控件树

use crate::commands::CommandTable;
use crate::config::layout::{LayoutConfig, NodeKind};
use crate::ui::registry::WidgetRegistry;
use crate::ui::widget::{
    Attach, Placement, ScrollThumb, TextAreaState, Widget, WidgetKey, WidgetKind, WidgetTree,
};

pub struct LayoutBuilder<'a, H> {
    commands: &'a CommandTable<H>,
}

impl<'a, H> LayoutBuilder<'a, H> {
    pub fn new(commands: &'a CommandTable<H>) -> Self {
        Self { commands }
    }

    /// Builds the subtree described by `config` under `parent`.
    ///
    /// Returns the created widget key, or `None` when the node is hidden —
    /// a hidden node and its whole subtree never reach the tree or the
    /// registry.
    pub fn build(
        &self,
        tree: &mut WidgetTree,
        registry: &mut WidgetRegistry,
        parent: Option<WidgetKey>,
        config: &LayoutConfig,
    ) -> Option<WidgetKey> {
        if !config.visible {
            return None;
        }

        let mut widget = Widget::new(Self::widget_kind(&config.kind));
        widget.name = config.name.clone();
        widget.width = config.width;
        widget.height = config.height;
        widget.enabled = config.enabled;

        if let NodeKind::Button { command, .. } = &config.kind {
            widget.command = *command;
            // Present but disabled when the command table has no handler.
            widget.enabled =
                config.enabled && command.map_or(true, |id| self.commands.contains(id));
        }

        widget.attach = match parent.and_then(|p| tree.get(p)) {
            Some(parent_widget) if matches!(parent_widget.kind, WidgetKind::Paned { .. }) => {
                Attach::PanedChild {
                    weight: config.weight,
                }
            }
            _ => Attach::Packed(Placement {
                side: config.side,
                fill: config.fill,
                expand: config.expand,
                anchor: config.anchor,
                padding: config.padding,
            }),
        };

        let key = tree.insert(parent, widget);
        if let Some(name) = &config.name {
            registry.register(name, key);
        }
        tracing::debug!(kind = config.kind_name(), name = ?config.name, "layout widget built");

        for child in &config.children {
            self.build(tree, registry, Some(key), child);
        }

        Some(key)
    }

    fn widget_kind(kind: &NodeKind) -> WidgetKind {
        match kind {
            NodeKind::Frame => WidgetKind::Frame,
            NodeKind::LabelFrame { title, .. } => WidgetKind::LabelFrame {
                title: title.clone(),
            },
            NodeKind::Paned { orient } => WidgetKind::Paned { orient: *orient },
            NodeKind::Notebook => WidgetKind::Notebook,
            NodeKind::Text { wrap, .. } => WidgetKind::Text(TextAreaState::new(*wrap)),
            NodeKind::TreeView => WidgetKind::TreeView { items: Vec::new() },
            NodeKind::Scrollbar { orient } => WidgetKind::Scrollbar {
                orient: *orient,
                target: None,
                thumb: ScrollThumb::default(),
            },
            NodeKind::Label { text } => WidgetKind::Label { text: text.clone() },
            NodeKind::Button { text, .. } => WidgetKind::Button { text: text.clone() },
            NodeKind::Entry => WidgetKind::Entry {
                text: String::new(),
            },
            NodeKind::Combobox { values } => WidgetKind::Combobox {
                values: values.clone(),
                selected: None,
            },
            NodeKind::Progressbar { mode, length } => WidgetKind::Progressbar {
                mode: *mode,
                length: *length,
                running: false,
                value: 0,
            },
        }
    }
}

impl LayoutConfig {
    fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Frame => "frame",
            NodeKind::LabelFrame { .. } => "labelframe",
            NodeKind::Paned { .. } => "panedwindow",
            NodeKind::Notebook => "notebook",
            NodeKind::Text { .. } => "text",
            NodeKind::TreeView => "treeview",
            NodeKind::Scrollbar { .. } => "scrollbar",
            NodeKind::Label { .. } => "label",
            NodeKind::Button { .. } => "button",
            NodeKind::Entry => "entry",
            NodeKind::Combobox { .. } => "combobox",
            NodeKind::Progressbar { .. } => "progressbar",
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/build/layout.rs"]
mod tests;

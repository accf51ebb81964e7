//! 工具栏构建器：把 ToolbarConfig 变成工具栏控件

use crate::commands::CommandTable;
use crate::config::toolbar::{ToolbarConfig, ToolbarItemConfig, ToolbarItemKind};
use crate::config::Orientation;
use crate::ui::widget::{Widget, WidgetKey, WidgetKind, WidgetTree};

pub struct ToolbarBuilder<'a, H> {
    commands: &'a CommandTable<H>,
}

impl<'a, H> ToolbarBuilder<'a, H> {
    pub fn new(commands: &'a CommandTable<H>) -> Self {
        Self { commands }
    }

    /// Builds the toolbar container and its visible items under `parent`.
    pub fn build(
        &self,
        tree: &mut WidgetTree,
        parent: Option<WidgetKey>,
        config: &ToolbarConfig,
    ) -> WidgetKey {
        let container = tree.insert(
            parent,
            Widget::new(WidgetKind::Toolbar {
                orient: config.orientation,
            }),
        );

        for item in &config.items {
            if !item.visible {
                continue;
            }
            self.build_item(tree, container, item);
        }

        container
    }

    fn build_item(&self, tree: &mut WidgetTree, container: WidgetKey, item: &ToolbarItemConfig) {
        let kind = match &item.kind {
            ToolbarItemKind::Button { text, .. } => WidgetKind::Button { text: text.clone() },
            ToolbarItemKind::Separator => WidgetKind::Separator {
                // Perpendicular to the toolbar itself: the container's
                // orientation decides, not the descriptor.
                orient: Self::container_orientation(tree, container).perpendicular(),
            },
            ToolbarItemKind::Label { text } => WidgetKind::Label { text: text.clone() },
            ToolbarItemKind::Entry => WidgetKind::Entry {
                text: String::new(),
            },
            ToolbarItemKind::Combobox { values } => WidgetKind::Combobox {
                values: values.clone(),
                selected: None,
            },
        };

        let mut widget = Widget::new(kind);
        widget.tooltip = item.tooltip.clone();
        widget.style = item.style.clone();
        widget.width = item.width;
        widget.enabled = item.enabled;

        if let ToolbarItemKind::Button { command, .. } = &item.kind {
            widget.command = *command;
            widget.enabled =
                item.enabled && command.map_or(true, |id| self.commands.contains(id));
        }

        tree.insert(Some(container), widget);
    }

    fn container_orientation(tree: &WidgetTree, container: WidgetKey) -> Orientation {
        match tree.get(container).map(|w| &w.kind) {
            Some(WidgetKind::Toolbar { orient }) => *orient,
            _ => Orientation::Horizontal,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/build/toolbar.rs"]
mod tests;

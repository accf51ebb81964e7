//! 菜单构建器：把 MenuConfig 变成菜单控件树

use crate::commands::CommandTable;
use crate::config::menu::{MenuConfig, MenuItemConfig};
use crate::ui::widget::{Widget, WidgetKey, WidgetKind, WidgetTree};

pub struct MenuBuilder<'a, H> {
    commands: &'a CommandTable<H>,
}

impl<'a, H> MenuBuilder<'a, H> {
    pub fn new(commands: &'a CommandTable<H>) -> Self {
        Self { commands }
    }

    /// Builds the menu bar and every visible cascade beneath it.
    pub fn build(
        &self,
        tree: &mut WidgetTree,
        parent: Option<WidgetKey>,
        config: &MenuConfig,
    ) -> WidgetKey {
        let menubar = tree.insert(parent, Widget::new(WidgetKind::MenuBar));

        for menu_config in &config.menus {
            if !menu_config.visible {
                continue;
            }
            let menu = tree.insert(
                Some(menubar),
                Widget::new(WidgetKind::Menu {
                    label: menu_config.label.clone(),
                }),
            );
            self.build_items(tree, menu, &menu_config.submenu);
        }

        menubar
    }

    fn build_items(&self, tree: &mut WidgetTree, menu: WidgetKey, items: &[MenuItemConfig]) {
        for item in items {
            if !item.visible {
                continue;
            }

            if item.is_separator {
                tree.insert(Some(menu), Widget::new(WidgetKind::MenuSeparator));
            } else if !item.submenu.is_empty() {
                let submenu = tree.insert(
                    Some(menu),
                    Widget::new(WidgetKind::Menu {
                        label: item.label.clone(),
                    }),
                );
                self.build_items(tree, submenu, &item.submenu);
            } else {
                let mut widget = Widget::new(WidgetKind::MenuItem {
                    label: item.label.clone(),
                    accelerator: item.accelerator.clone(),
                });
                widget.command = item.command;
                // Unresolved commands leave the entry present but disabled.
                widget.enabled =
                    item.enabled && item.command.map_or(true, |id| self.commands.contains(id));
                tree.insert(Some(menu), widget);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/build/menu.rs"]
mod tests;

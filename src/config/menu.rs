//! 菜单配置：声明式描述菜单栏
//!
//! 配置只描述结构；MenuBuilder 负责创建控件并解析命令。

use crate::commands::CommandId;

/// Configuration for a single menu entry.
#[derive(Debug, Clone, Default)]
pub struct MenuItemConfig {
    pub label: String,
    pub command: Option<CommandId>,
    pub accelerator: Option<String>,
    pub is_separator: bool,
    pub submenu: Vec<MenuItemConfig>,
    pub enabled: bool,
    pub visible: bool,
}

impl MenuItemConfig {
    pub fn item(label: &str, command: CommandId) -> Self {
        Self {
            label: label.to_string(),
            command: Some(command),
            enabled: true,
            visible: true,
            ..Default::default()
        }
    }

    pub fn item_with_accel(label: &str, command: CommandId, accelerator: &str) -> Self {
        Self {
            accelerator: Some(accelerator.to_string()),
            ..Self::item(label, command)
        }
    }

    pub fn separator() -> Self {
        Self {
            is_separator: true,
            enabled: true,
            visible: true,
            ..Default::default()
        }
    }

    pub fn cascade(label: &str, submenu: Vec<MenuItemConfig>) -> Self {
        Self {
            label: label.to_string(),
            submenu,
            enabled: true,
            visible: true,
            ..Default::default()
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Complete menu bar configuration.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub menus: Vec<MenuItemConfig>,
}

/// The shipped menu bar: File / Edit / View / Tools / Help.
pub fn default_menu_config() -> MenuConfig {
    use MenuItemConfig as Item;

    MenuConfig {
        menus: vec![
            Item::cascade(
                "File",
                vec![
                    Item::item_with_accel("New", CommandId::NewFile, "Ctrl+N"),
                    Item::item_with_accel("Open", CommandId::OpenFile, "Ctrl+O"),
                    Item::separator(),
                    Item::item_with_accel("Save", CommandId::SaveFile, "Ctrl+S"),
                    Item::item_with_accel("Save As", CommandId::SaveAsFile, "Ctrl+Shift+S"),
                    Item::separator(),
                    Item::item_with_accel("Exit", CommandId::ExitApp, "Ctrl+Q"),
                ],
            ),
            Item::cascade(
                "Edit",
                vec![
                    Item::item_with_accel("Cut", CommandId::Cut, "Ctrl+X"),
                    Item::item_with_accel("Copy", CommandId::Copy, "Ctrl+C"),
                    Item::item_with_accel("Paste", CommandId::Paste, "Ctrl+V"),
                    Item::separator(),
                    Item::item_with_accel("Select All", CommandId::SelectAll, "Ctrl+A"),
                    Item::separator(),
                    Item::item_with_accel("Find", CommandId::Find, "Ctrl+F"),
                    Item::item_with_accel("Replace", CommandId::Replace, "Ctrl+H"),
                ],
            ),
            Item::cascade(
                "View",
                vec![
                    Item::item("Toggle Theme", CommandId::ToggleTheme),
                    Item::item_with_accel("Zoom In", CommandId::ZoomIn, "Ctrl+Plus"),
                    Item::item_with_accel("Zoom Out", CommandId::ZoomOut, "Ctrl+Minus"),
                    Item::item_with_accel("Reset Zoom", CommandId::ResetZoom, "Ctrl+0"),
                    Item::separator(),
                    Item::item("Toggle Sidebar", CommandId::ToggleSidebar),
                    Item::item("Toggle Status Bar", CommandId::ToggleStatusbar),
                ],
            ),
            Item::cascade(
                "Tools",
                vec![
                    Item::item("Preferences", CommandId::ShowPreferences),
                    Item::item("Export", CommandId::ExportData),
                    Item::separator(),
                    Item::item("Plugin Manager", CommandId::ShowPlugins),
                ],
            ),
            Item::cascade(
                "Help",
                vec![
                    Item::item("User Guide", CommandId::ShowHelp),
                    Item::item("Keyboard Shortcuts", CommandId::ShowShortcuts),
                    Item::separator(),
                    Item::item("Check for Updates", CommandId::CheckUpdates),
                    Item::item("About", CommandId::ShowAbout),
                ],
            ),
        ],
    }
}

/// Context menu for the text area.
pub fn context_menu_config() -> MenuConfig {
    use MenuItemConfig as Item;

    MenuConfig {
        menus: vec![Item::cascade(
            "Context",
            vec![
                Item::item("Cut", CommandId::Cut),
                Item::item("Copy", CommandId::Copy),
                Item::item("Paste", CommandId::Paste),
                Item::separator(),
                Item::item("Select All", CommandId::SelectAll),
            ],
        )],
    }
}

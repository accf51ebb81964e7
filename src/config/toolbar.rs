//! 工具栏配置：声明式描述工具栏内容
//!
//! 每个条目的种类是带字段的枚举：每种控件只携带自己合法的属性，
//! 非法组合在构造期就不可表示。

use crate::commands::CommandId;

use super::Orientation;

/// Per-kind payload of one toolbar element.
#[derive(Debug, Clone)]
pub enum ToolbarItemKind {
    Button {
        text: String,
        command: Option<CommandId>,
    },
    Separator,
    Label {
        text: String,
    },
    Entry,
    Combobox {
        values: Vec<String>,
    },
}

/// Configuration for one toolbar element.
#[derive(Debug, Clone)]
pub struct ToolbarItemConfig {
    pub kind: ToolbarItemKind,
    pub tooltip: Option<String>,
    /// Fixed width in cells; `None` lets the widget size itself.
    pub width: Option<u16>,
    pub enabled: bool,
    pub visible: bool,
    pub style: Option<String>,
}

impl ToolbarItemConfig {
    fn new(kind: ToolbarItemKind) -> Self {
        Self {
            kind,
            tooltip: None,
            width: None,
            enabled: true,
            visible: true,
            style: None,
        }
    }

    pub fn button(text: &str, command: CommandId) -> Self {
        Self::new(ToolbarItemKind::Button {
            text: text.to_string(),
            command: Some(command),
        })
    }

    pub fn separator() -> Self {
        Self::new(ToolbarItemKind::Separator)
    }

    pub fn label(text: &str) -> Self {
        Self::new(ToolbarItemKind::Label {
            text: text.to_string(),
        })
    }

    pub fn entry() -> Self {
        Self::new(ToolbarItemKind::Entry)
    }

    pub fn combobox(values: Vec<String>) -> Self {
        Self::new(ToolbarItemKind::Combobox { values })
    }

    pub fn tooltip(mut self, text: &str) -> Self {
        self.tooltip = Some(text.to_string());
        self
    }

    pub fn width(mut self, cells: u16) -> Self {
        self.width = Some(cells);
        self
    }

    pub fn style(mut self, tag: &str) -> Self {
        self.style = Some(tag.to_string());
        self
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

/// Complete toolbar configuration.
#[derive(Debug, Clone)]
pub struct ToolbarConfig {
    pub items: Vec<ToolbarItemConfig>,
    pub orientation: Orientation,
}

/// The shipped toolbar: file actions, clipboard actions, theme, search box.
pub fn default_toolbar_config() -> ToolbarConfig {
    use ToolbarItemConfig as Item;

    ToolbarConfig {
        items: vec![
            Item::button("New", CommandId::NewFile).tooltip("Create a new file (Ctrl+N)"),
            Item::button("Open", CommandId::OpenFile).tooltip("Open an existing file (Ctrl+O)"),
            Item::button("Save", CommandId::SaveFile).tooltip("Save the current file (Ctrl+S)"),
            Item::separator(),
            Item::button("Cut", CommandId::Cut).tooltip("Cut selected text (Ctrl+X)"),
            Item::button("Copy", CommandId::Copy).tooltip("Copy selected text (Ctrl+C)"),
            Item::button("Paste", CommandId::Paste).tooltip("Paste from clipboard (Ctrl+V)"),
            Item::separator(),
            Item::button("Theme", CommandId::ToggleTheme)
                .tooltip("Toggle between light and dark theme"),
            Item::separator(),
            Item::label("Search:"),
            Item::entry().width(20).tooltip("Enter search terms"),
        ],
        orientation: Orientation::Horizontal,
    }
}

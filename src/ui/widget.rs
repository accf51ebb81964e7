//! Retained widget state.
//!
//! Builders turn configuration trees into `Widget` nodes stored in a
//! slotmap-backed arena. The arena owns all widget state for the lifetime
//! of the window; rendering and command handling only hold `WidgetKey`s.

use ropey::Rope;
use slotmap::{new_key_type, SlotMap};

use crate::commands::CommandId;
use crate::config::layout::{Anchor, Fill, Pad, ProgressMode, Side, Wrap};
use crate::config::Orientation;

new_key_type! { pub struct WidgetKey; }

/// Translated pack-geometry hints, stored on the widget for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub side: Side,
    pub fill: Fill,
    pub expand: bool,
    pub anchor: Anchor,
    pub padding: Pad,
}

/// How a widget is attached to its parent. Children of a paned container
/// go through the weighted path instead of plain packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    Packed(Placement),
    PanedChild { weight: u16 },
}

impl Default for Attach {
    fn default() -> Self {
        Attach::Packed(Placement::default())
    }
}

#[derive(Debug, Clone)]
pub struct TreeItem {
    pub text: String,
    pub open: bool,
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    pub fn leaf(text: &str) -> Self {
        Self {
            text: text.to_string(),
            open: false,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    All,
}

/// Editable text content backed by a rope.
#[derive(Debug, Clone)]
pub struct TextAreaState {
    content: Rope,
    pub wrap: Wrap,
    pub scroll: usize,
    selection: Selection,
}

impl TextAreaState {
    pub fn new(wrap: Wrap) -> Self {
        Self {
            content: Rope::new(),
            wrap,
            scroll: 0,
            selection: Selection::None,
        }
    }

    pub fn text(&self) -> String {
        self.content.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.content.len_chars() == 0
    }

    pub fn set_text(&mut self, text: &str) {
        self.content = Rope::from_str(text);
        self.scroll = 0;
        self.selection = Selection::None;
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn append(&mut self, text: &str) {
        let end = self.content.len_chars();
        self.content.insert(end, text);
    }

    pub fn pop_char(&mut self) {
        let len = self.content.len_chars();
        if len > 0 {
            self.content.remove(len - 1..len);
        }
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::All;
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    pub fn has_selection(&self) -> bool {
        self.selection == Selection::All
    }

    pub fn selected_text(&self) -> Option<String> {
        match self.selection {
            Selection::None => None,
            Selection::All => Some(self.text()),
        }
    }

    /// Removes and returns the selected text.
    pub fn take_selection(&mut self) -> Option<String> {
        let text = self.selected_text()?;
        self.clear();
        Some(text)
    }

    pub fn line_count(&self) -> usize {
        self.content.len_lines()
    }

    pub fn scroll_to(&mut self, line: usize) {
        self.scroll = line.min(self.line_count().saturating_sub(1));
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let line = self.scroll.saturating_add_signed(delta);
        self.scroll_to(line);
    }
}

/// Scrollbar thumb geometry, kept in sync with the target widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollThumb {
    pub position: usize,
    pub total: usize,
    pub viewport: usize,
}

/// Per-kind widget state.
#[derive(Debug, Clone)]
pub enum WidgetKind {
    Frame,
    LabelFrame {
        title: String,
    },
    Paned {
        orient: Orientation,
    },
    Notebook,
    Toolbar {
        orient: Orientation,
    },
    Text(TextAreaState),
    TreeView {
        items: Vec<TreeItem>,
    },
    Scrollbar {
        orient: Orientation,
        target: Option<WidgetKey>,
        thumb: ScrollThumb,
    },
    Label {
        text: String,
    },
    Button {
        text: String,
    },
    Entry {
        text: String,
    },
    Combobox {
        values: Vec<String>,
        selected: Option<usize>,
    },
    Progressbar {
        mode: ProgressMode,
        length: u16,
        running: bool,
        value: u16,
    },
    Separator {
        orient: Orientation,
    },
    MenuBar,
    Menu {
        label: String,
    },
    MenuItem {
        label: String,
        accelerator: Option<String>,
    },
    MenuSeparator,
}

impl WidgetKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            WidgetKind::Frame => "frame",
            WidgetKind::LabelFrame { .. } => "labelframe",
            WidgetKind::Paned { .. } => "panedwindow",
            WidgetKind::Notebook => "notebook",
            WidgetKind::Toolbar { .. } => "toolbar",
            WidgetKind::Text(_) => "text",
            WidgetKind::TreeView { .. } => "treeview",
            WidgetKind::Scrollbar { .. } => "scrollbar",
            WidgetKind::Label { .. } => "label",
            WidgetKind::Button { .. } => "button",
            WidgetKind::Entry { .. } => "entry",
            WidgetKind::Combobox { .. } => "combobox",
            WidgetKind::Progressbar { .. } => "progressbar",
            WidgetKind::Separator { .. } => "separator",
            WidgetKind::MenuBar => "menubar",
            WidgetKind::Menu { .. } => "menu",
            WidgetKind::MenuItem { .. } => "menuitem",
            WidgetKind::MenuSeparator => "menuseparator",
        }
    }
}

/// One live widget in the tree.
#[derive(Debug, Clone)]
pub struct Widget {
    pub kind: WidgetKind,
    pub name: Option<String>,
    pub command: Option<CommandId>,
    pub tooltip: Option<String>,
    pub style: Option<String>,
    pub enabled: bool,
    pub attach: Attach,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub parent: Option<WidgetKey>,
    pub children: Vec<WidgetKey>,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            name: None,
            command: None,
            tooltip: None,
            style: None,
            enabled: true,
            attach: Attach::default(),
            width: None,
            height: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena of live widgets for one window.
#[derive(Default)]
pub struct WidgetTree {
    nodes: SlotMap<WidgetKey, Widget>,
    root: Option<WidgetKey>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `widget` under `parent` (or as the tree root when `parent`
    /// is `None` and no root exists yet).
    pub fn insert(&mut self, parent: Option<WidgetKey>, mut widget: Widget) -> WidgetKey {
        widget.parent = parent;
        let key = self.nodes.insert(widget);
        match parent {
            Some(parent_key) => {
                if let Some(parent_widget) = self.nodes.get_mut(parent_key) {
                    parent_widget.children.push(key);
                }
            }
            None => {
                if self.root.is_none() {
                    self.root = Some(key);
                }
            }
        }
        key
    }

    pub fn root(&self) -> Option<WidgetKey> {
        self.root
    }

    pub fn get(&self, key: WidgetKey) -> Option<&Widget> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: WidgetKey) -> Option<&mut Widget> {
        self.nodes.get_mut(key)
    }

    pub fn children(&self, key: WidgetKey) -> &[WidgetKey] {
        self.nodes
            .get(key)
            .map(|w| w.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: WidgetKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Returns the command wired to `key`, or `None` when the widget is
    /// disabled or carries no command. Activating a disabled or command-less
    /// widget is a no-op, never an error.
    pub fn activate(&self, key: WidgetKey) -> Option<CommandId> {
        let widget = self.get(key)?;
        if !widget.enabled {
            return None;
        }
        widget.command
    }

    pub fn text_area(&self, key: WidgetKey) -> Option<&TextAreaState> {
        match &self.get(key)?.kind {
            WidgetKind::Text(state) => Some(state),
            _ => None,
        }
    }

    pub fn text_area_mut(&mut self, key: WidgetKey) -> Option<&mut TextAreaState> {
        match &mut self.get_mut(key)?.kind {
            WidgetKind::Text(state) => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/widget.rs"]
mod tests;

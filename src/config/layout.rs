//! 布局配置：声明式描述窗口布局树
//!
//! 每个节点的种类（NodeKind）是带字段的枚举，只携带该控件合法的属性；
//! 摆放提示（fill/expand/anchor/side/padding/weight）由构建器翻译成
//! 实际的几何调用。树是有限且无环的：子节点按值持有。

use super::Orientation;
use crate::commands::CommandId;

/// Pack side, mirroring tk's pack geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Which axes the widget stretches along inside its allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fill {
    #[default]
    None,
    X,
    Y,
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// Horizontal/vertical padding in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pad {
    pub x: u16,
    pub y: u16,
}

impl Pad {
    pub const fn all(v: u16) -> Self {
        Self { x: v, y: v }
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Wrap {
    None,
    #[default]
    Word,
    Char,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressMode {
    #[default]
    Determinate,
    Indeterminate,
}

/// Per-kind payload of one layout node. Each variant carries exactly the
/// properties that kind of widget accepts.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Frame,
    LabelFrame {
        title: String,
        padding: u16,
    },
    Paned {
        orient: Orientation,
    },
    Notebook,
    Text {
        wrap: Wrap,
        undo: bool,
    },
    TreeView,
    Scrollbar {
        orient: Orientation,
    },
    Label {
        text: String,
    },
    Button {
        text: String,
        command: Option<CommandId>,
    },
    Entry,
    Combobox {
        values: Vec<String>,
    },
    Progressbar {
        mode: ProgressMode,
        length: u16,
    },
}

/// Configuration for one layout node.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    pub kind: NodeKind,
    pub name: Option<String>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub padding: Pad,
    pub fill: Fill,
    pub expand: bool,
    pub anchor: Anchor,
    pub side: Side,
    /// Weight used when the parent is a paned container.
    pub weight: u16,
    pub visible: bool,
    pub enabled: bool,
    pub children: Vec<LayoutConfig>,
}

impl LayoutConfig {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            weight: 1,
            visible: true,
            enabled: true,
            ..Default::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn padding(mut self, pad: Pad) -> Self {
        self.padding = pad;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn children(mut self, children: Vec<LayoutConfig>) -> Self {
        self.children = children;
        self
    }
}

/// Complete window layout configuration.
#[derive(Debug, Clone)]
pub struct WindowLayout {
    pub title: String,
    pub width: u16,
    pub height: u16,
    pub resizable: (bool, bool),
    pub root: LayoutConfig,
}

/// The shipped window layout: toolbar row, paned main area (navigation tree
/// on the left, text area + scrollbar on the right), status row.
pub fn default_window_layout() -> WindowLayout {
    use LayoutConfig as Node;

    WindowLayout {
        title: "Cowriter".to_string(),
        width: 800,
        height: 600,
        resizable: (true, true),
        root: Node::new(NodeKind::Frame)
            .named("root")
            .fill(Fill::Both)
            .expand()
            .children(vec![
                // Toolbar
                Node::new(NodeKind::Frame)
                    .named("toolbar_container")
                    .fill(Fill::X)
                    .side(Side::Top)
                    .padding(Pad::xy(5, 5)),
                // Main content area
                Node::new(NodeKind::Paned {
                    orient: Orientation::Horizontal,
                })
                .named("main_paned")
                .fill(Fill::Both)
                .expand()
                .side(Side::Top)
                .padding(Pad::all(5))
                .children(vec![
                    // Left panel
                    Node::new(NodeKind::LabelFrame {
                        title: "Navigation".to_string(),
                        padding: 10,
                    })
                    .named("left_panel")
                    .weight(1)
                    .children(vec![Node::new(NodeKind::TreeView)
                        .named("navigation_tree")
                        .fill(Fill::Both)
                        .expand()]),
                    // Right panel
                    Node::new(NodeKind::LabelFrame {
                        title: "Content".to_string(),
                        padding: 10,
                    })
                    .named("right_panel")
                    .weight(3)
                    .children(vec![Node::new(NodeKind::Frame)
                        .named("text_container")
                        .fill(Fill::Both)
                        .expand()
                        .children(vec![
                            Node::new(NodeKind::Text {
                                wrap: Wrap::Word,
                                undo: true,
                            })
                            .named("text_area")
                            .fill(Fill::Both)
                            .expand()
                            .side(Side::Left),
                            Node::new(NodeKind::Scrollbar {
                                orient: Orientation::Vertical,
                            })
                            .named("text_scrollbar")
                            .fill(Fill::Y)
                            .side(Side::Right),
                        ])]),
                ]),
                // Status bar
                Node::new(NodeKind::Frame)
                    .named("status_container")
                    .fill(Fill::X)
                    .side(Side::Bottom)
                    .padding(Pad::xy(5, 5))
                    .children(vec![
                        Node::new(NodeKind::Label {
                            text: "Ready".to_string(),
                        })
                        .named("status_label")
                        .side(Side::Left),
                        Node::new(NodeKind::Progressbar {
                            mode: ProgressMode::Indeterminate,
                            length: 200,
                        })
                        .named("progress_bar")
                        .side(Side::Right),
                    ]),
            ]),
    }
}

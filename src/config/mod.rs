//! 声明式配置模块
//!
//! 菜单、工具栏、布局三种配置树都是纯数据：构造一次，之后只读。
//! 构建器（ui::build）负责把配置树变成活动控件。

pub mod layout;
pub mod menu;
pub mod settings;
pub mod toolbar;

pub use layout::{default_window_layout, LayoutConfig, NodeKind, WindowLayout};
pub use menu::{context_menu_config, default_menu_config, MenuConfig, MenuItemConfig};
pub use settings::Settings;
pub use toolbar::{default_toolbar_config, ToolbarConfig, ToolbarItemConfig, ToolbarItemKind};

/// Orientation shared by paned containers, toolbars, scrollbars and
/// separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

//! cowriter - 声明式配置的 TUI 文本编辑器外壳
//!
//! 模块结构：
//! - config: 声明式配置（MenuConfig, ToolbarConfig, LayoutConfig, Settings）
//! - commands: 命令系统（CommandId, CommandTable）
//! - ui: 控件树与构建器（WidgetTree, WidgetRegistry, builders）
//! - services: 服务层（FileService）
//! - shell: 主窗口协调器（MainWindow, Keymap）
//! - app: 应用层（Application, UiTheme）

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
#[cfg(feature = "tui")]
pub mod render;
pub mod services;
pub mod shell;
pub mod ui;

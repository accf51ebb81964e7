//! 命令系统：语义命令定义
//!
//! 架构：
//! - CommandId: 语义命令枚举（配置里只引用枚举值，不再用字符串反查方法）
//! - CommandTable: CommandId -> 处理函数 的类型化映射，构建一次后只读

pub mod table;

pub use table::{CommandFn, CommandTable};

/// Every symbolic command name the configurations may reference.
///
/// `name()`/`from_name()` round-trip on the snake_case names used by the
/// settings/menu authoring side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // ==================== 文件操作 ====================
    NewFile,
    OpenFile,
    SaveFile,
    SaveAsFile,
    ExitApp,

    // ==================== 编辑操作 ====================
    Cut,
    Copy,
    Paste,
    SelectAll,
    Find,
    Replace,

    // ==================== 视图操作 ====================
    ToggleTheme,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleSidebar,
    ToggleStatusbar,

    // ==================== 工具 ====================
    ShowPreferences,
    ExportData,
    ShowPlugins,

    // ==================== 帮助 ====================
    ShowHelp,
    ShowShortcuts,
    CheckUpdates,
    ShowAbout,
}

impl CommandId {
    pub fn name(&self) -> &'static str {
        match self {
            CommandId::NewFile => "new_file",
            CommandId::OpenFile => "open_file",
            CommandId::SaveFile => "save_file",
            CommandId::SaveAsFile => "save_as_file",
            CommandId::ExitApp => "exit_app",
            CommandId::Cut => "cut",
            CommandId::Copy => "copy",
            CommandId::Paste => "paste",
            CommandId::SelectAll => "select_all",
            CommandId::Find => "find",
            CommandId::Replace => "replace",
            CommandId::ToggleTheme => "toggle_theme",
            CommandId::ZoomIn => "zoom_in",
            CommandId::ZoomOut => "zoom_out",
            CommandId::ResetZoom => "reset_zoom",
            CommandId::ToggleSidebar => "toggle_sidebar",
            CommandId::ToggleStatusbar => "toggle_statusbar",
            CommandId::ShowPreferences => "show_preferences",
            CommandId::ExportData => "export_data",
            CommandId::ShowPlugins => "show_plugins",
            CommandId::ShowHelp => "show_help",
            CommandId::ShowShortcuts => "show_shortcuts",
            CommandId::CheckUpdates => "check_updates",
            CommandId::ShowAbout => "show_about",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "new_file" => CommandId::NewFile,
            "open_file" => CommandId::OpenFile,
            "save_file" => CommandId::SaveFile,
            "save_as_file" => CommandId::SaveAsFile,
            "exit_app" => CommandId::ExitApp,
            "cut" => CommandId::Cut,
            "copy" => CommandId::Copy,
            "paste" => CommandId::Paste,
            "select_all" => CommandId::SelectAll,
            "find" => CommandId::Find,
            "replace" => CommandId::Replace,
            "toggle_theme" => CommandId::ToggleTheme,
            "zoom_in" => CommandId::ZoomIn,
            "zoom_out" => CommandId::ZoomOut,
            "reset_zoom" => CommandId::ResetZoom,
            "toggle_sidebar" => CommandId::ToggleSidebar,
            "toggle_statusbar" => CommandId::ToggleStatusbar,
            "show_preferences" => CommandId::ShowPreferences,
            "export_data" => CommandId::ExportData,
            "show_plugins" => CommandId::ShowPlugins,
            "show_help" => CommandId::ShowHelp,
            "show_shortcuts" => CommandId::ShowShortcuts,
            "check_updates" => CommandId::CheckUpdates,
            "show_about" => CommandId::ShowAbout,
            _ => return None,
        })
    }

    pub fn is_file_command(&self) -> bool {
        matches!(
            self,
            CommandId::NewFile
                | CommandId::OpenFile
                | CommandId::SaveFile
                | CommandId::SaveAsFile
        )
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            CommandId::Cut | CommandId::Copy | CommandId::Paste | CommandId::SelectAll
        )
    }
}

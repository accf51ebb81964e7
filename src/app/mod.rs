//! 应用层
//!
//! - theme: 主题（ThemeKind 核心可用，UiTheme 调色板在 tui 特性下）
//! - Application: 启动装配与事件循环（tui 特性下）

pub mod theme;

#[cfg(feature = "tui")]
mod runtime;

#[cfg(feature = "tui")]
pub use runtime::Application;

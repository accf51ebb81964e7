//! 应用设置：窗口几何、主题、日志级别、自动保存
//!
//! 默认值即出厂配置；可用 JSON 文件覆盖（字段缺省时取默认值）。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::theme::ThemeKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub app_author: String,

    pub window_width: u16,
    pub window_height: u16,
    pub window_min_width: u16,
    pub window_min_height: u16,

    pub theme: ThemeKind,

    pub log_level: String,

    pub auto_save: bool,
    /// 自动保存间隔（秒）
    pub auto_save_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Cowriter".to_string(),
            app_version: "1.0.0".to_string(),
            app_author: "DevOpsJeremy".to_string(),
            window_width: 800,
            window_height: 600,
            window_min_width: 600,
            window_min_height: 400,
            theme: ThemeKind::Dark,
            log_level: "info".to_string(),
            auto_save: true,
            auto_save_interval_secs: 300,
        }
    }
}

impl Settings {
    pub fn window_title(&self) -> &str {
        &self.app_name
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(std::io::Error::other)
    }

    /// Reads settings from `path` when it exists; parse failures fall back
    /// to defaults with a warning instead of aborting startup.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }
}

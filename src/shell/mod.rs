//! 主窗口协调器
//!
//! MainWindow 把三个构建器组合到同一个控件树上：先布局，再菜单栏，
//! 再把工具栏挂进布局产出的 toolbar_container；随后交叉连接滚动条与
//! 文本区、填充占位内容、装载固定快捷键表。命令处理函数也定义在这里，
//! 全部在 UI 线程上同步执行。

use std::path::{Path, PathBuf};

use crate::app::theme::ThemeKind;
use crate::commands::{CommandId, CommandTable};
use crate::config::layout::default_window_layout;
use crate::config::menu::default_menu_config;
use crate::config::settings::Settings;
use crate::config::toolbar::default_toolbar_config;
use crate::services::file::FileService;
use crate::ui::build::{LayoutBuilder, MenuBuilder, ToolbarBuilder};
use crate::ui::registry::WidgetRegistry;
use crate::ui::widget::{TextAreaState, TreeItem, WidgetKey, WidgetKind, WidgetTree};

pub mod keymap;

pub use keymap::{KeyChord, Keymap};

const WELCOME_TEXT: &str = "Welcome to Cowriter!\n\n\
This is a modern desktop application built with:\n\
\u{2022} Rust and ratatui\n\
\u{2022} A declarative widget-tree configuration\n\
\u{2022} Clean MVC architecture\n\n\
Start building your application logic here!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    Save,
}

/// Modal path prompt for open/save.
#[derive(Debug, Clone)]
pub struct PathPrompt {
    pub kind: PromptKind,
    pub input: String,
}

impl PathPrompt {
    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Open => "Open File",
            PromptKind::Save => "Save File",
        }
    }
}

/// Modal error dialog.
#[derive(Debug, Clone)]
pub struct ModalDialog {
    pub title: String,
    pub message: String,
}

/// Plain (non-accelerator) input routed to the prompt or the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    Enter,
    Backspace,
    Esc,
}

pub struct MainWindow {
    tree: WidgetTree,
    registry: WidgetRegistry,
    commands: CommandTable<MainWindow>,
    keymap: Keymap,
    files: FileService,
    theme: ThemeKind,
    title: String,
    clipboard: Option<String>,
    current_file: Option<PathBuf>,
    prompt: Option<PathPrompt>,
    modal: Option<ModalDialog>,
    should_quit: bool,
    menubar: Option<WidgetKey>,
    toolbar: Option<WidgetKey>,
}

impl MainWindow {
    pub fn new(settings: &Settings) -> Self {
        let commands = Self::command_table();
        let mut tree = WidgetTree::new();
        let mut registry = WidgetRegistry::new();

        let layout = default_window_layout();
        LayoutBuilder::new(&commands).build(&mut tree, &mut registry, None, &layout.root);
        let root = tree.root();

        let menubar = MenuBuilder::new(&commands).build(&mut tree, root, &default_menu_config());

        let toolbar_parent = registry.lookup("toolbar_container").or(root);
        let toolbar =
            ToolbarBuilder::new(&commands).build(&mut tree, toolbar_parent, &default_toolbar_config());

        let mut window = Self {
            tree,
            registry,
            commands,
            keymap: Keymap::default(),
            files: FileService::new(),
            theme: settings.theme,
            title: layout.title,
            clipboard: None,
            current_file: None,
            prompt: None,
            modal: None,
            should_quit: false,
            menubar: Some(menubar),
            toolbar: Some(toolbar),
        };

        window.wire_scrollbar();
        window.insert_placeholder_content();
        tracing::info!(widgets = window.tree.len(), "main window built");
        window
    }

    /// The typed command table, built once. Stub commands (find, replace,
    /// zoom, preferences, about, exit …) are deliberately unregistered and
    /// resolve absent, so their controls come out disabled.
    fn command_table() -> CommandTable<Self> {
        let mut table = CommandTable::new();
        table.register(CommandId::NewFile, Self::new_file);
        table.register(CommandId::OpenFile, Self::open_file);
        table.register(CommandId::SaveFile, Self::save_file);
        table.register(CommandId::SaveAsFile, Self::save_as_file);
        table.register(CommandId::Cut, Self::cut);
        table.register(CommandId::Copy, Self::copy);
        table.register(CommandId::Paste, Self::paste);
        table.register(CommandId::SelectAll, Self::select_all);
        table.register(CommandId::ToggleTheme, Self::toggle_theme);
        table
    }

    // ==================== 组装 ====================

    fn wire_scrollbar(&mut self) {
        let Some(text_key) = self.registry.lookup("text_area") else {
            return;
        };
        let Some(scrollbar_key) = self.registry.lookup("text_scrollbar") else {
            return;
        };
        if let Some(widget) = self.tree.get_mut(scrollbar_key) {
            if let WidgetKind::Scrollbar { target, .. } = &mut widget.kind {
                *target = Some(text_key);
            }
        }
        self.sync_scrollbar();
    }

    fn insert_placeholder_content(&mut self) {
        if let Some(key) = self.registry.lookup("navigation_tree") {
            if let Some(widget) = self.tree.get_mut(key) {
                if let WidgetKind::TreeView { items } = &mut widget.kind {
                    items.push(TreeItem {
                        open: true,
                        ..TreeItem::leaf("Project")
                    });
                    items.push(TreeItem::leaf("Documents"));
                    items.push(TreeItem::leaf("Settings"));
                }
            }
        }
        self.with_text_area(|area| area.set_text(WELCOME_TEXT));
        self.sync_scrollbar();
    }

    /// Pushes the text area's scroll position and line count into the
    /// scrollbar thumb it is wired to.
    pub fn sync_scrollbar(&mut self) {
        let Some(text_key) = self.registry.lookup("text_area") else {
            return;
        };
        let Some((position, total)) = self
            .tree
            .text_area(text_key)
            .map(|area| (area.scroll, area.line_count()))
        else {
            return;
        };
        let Some(scrollbar_key) = self.registry.lookup("text_scrollbar") else {
            return;
        };
        if let Some(widget) = self.tree.get_mut(scrollbar_key) {
            if let WidgetKind::Scrollbar { thumb, .. } = &mut widget.kind {
                thumb.position = position;
                thumb.total = total;
            }
        }
    }

    // ==================== 命令处理 ====================

    fn new_file(&mut self) {
        self.with_text_area(|area| area.clear());
        self.current_file = None;
        self.set_status("New file created");
        tracing::info!("new file created");
    }

    fn open_file(&mut self) {
        self.prompt = Some(PathPrompt {
            kind: PromptKind::Open,
            input: String::new(),
        });
    }

    fn save_file(&mut self) {
        self.prompt = Some(PathPrompt {
            kind: PromptKind::Save,
            input: self
                .current_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        });
    }

    // Save As behaves exactly like Save for now: both always prompt.
    fn save_as_file(&mut self) {
        self.save_file();
    }

    fn cut(&mut self) {
        if let Some(Some(text)) = self.with_text_area(|area| area.take_selection()) {
            self.clipboard = Some(text);
            self.set_status("Cut to clipboard");
        }
    }

    fn copy(&mut self) {
        if let Some(Some(text)) = self.with_text_area(|area| area.selected_text()) {
            self.clipboard = Some(text);
            self.set_status("Copied to clipboard");
        }
    }

    fn paste(&mut self) {
        let Some(text) = self.clipboard.clone() else {
            return;
        };
        self.with_text_area(|area| {
            // An active selection is replaced by the pasted text.
            if area.has_selection() {
                area.take_selection();
            }
            area.append(&text);
        });
        self.set_status("Pasted from clipboard");
    }

    fn select_all(&mut self) {
        self.with_text_area(|area| area.select_all());
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.set_status(&format!("Switched to {} theme", self.theme.name()));
        tracing::info!(theme = self.theme.name(), "theme changed");
    }

    // ==================== 文件读写 ====================

    pub fn open_path(&mut self, path: &Path) {
        match self.files.read_text(path) {
            Ok(content) => {
                self.with_text_area(|area| area.set_text(&content));
                self.current_file = Some(path.to_path_buf());
                self.set_status(&format!("Opened: {}", path.display()));
                self.sync_scrollbar();
                tracing::info!(path = %path.display(), "opened file");
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to open file");
                self.modal = Some(ModalDialog {
                    title: "Error".to_string(),
                    message: format!("Failed to open file: {err}"),
                });
            }
        }
    }

    pub fn save_path(&mut self, path: &Path) {
        let content = self.text();
        match self.files.write_text(path, &content) {
            Ok(()) => {
                self.current_file = Some(path.to_path_buf());
                self.set_status(&format!("Saved: {}", path.display()));
                tracing::info!(path = %path.display(), "saved file");
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to save file");
                self.modal = Some(ModalDialog {
                    title: "Error".to_string(),
                    message: format!("Failed to save file: {err}"),
                });
            }
        }
    }

    // ==================== 输入分发 ====================

    /// Resolves an accelerator chord; unbound or handler-less chords are
    /// no-ops.
    pub fn handle_chord(&mut self, chord: KeyChord) {
        if self.modal.is_some() || self.prompt.is_some() {
            return;
        }
        if let Some(id) = self.keymap.lookup(chord) {
            self.invoke(id);
        }
    }

    /// Routes plain input: a modal eats the key, a prompt edits its path
    /// buffer, everything else types into the text area.
    pub fn handle_input(&mut self, key: InputKey) {
        if self.modal.is_some() {
            self.modal = None;
            return;
        }

        if self.prompt.is_some() {
            self.handle_prompt_input(key);
            return;
        }

        match key {
            InputKey::Char(c) => {
                self.with_text_area(|area| {
                    area.clear_selection();
                    area.append(&c.to_string());
                });
            }
            InputKey::Enter => {
                self.with_text_area(|area| area.append("\n"));
            }
            InputKey::Backspace => {
                self.with_text_area(|area| area.pop_char());
            }
            InputKey::Esc => {}
        }
        self.sync_scrollbar();
    }

    fn handle_prompt_input(&mut self, key: InputKey) {
        match key {
            InputKey::Char(c) => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.input.push(c);
                }
            }
            InputKey::Backspace => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.input.pop();
                }
            }
            InputKey::Esc => {
                self.prompt = None;
            }
            InputKey::Enter => {
                let Some(prompt) = self.prompt.take() else {
                    return;
                };
                let input = prompt.input.trim();
                if input.is_empty() {
                    return;
                }
                let path = PathBuf::from(input);
                match prompt.kind {
                    PromptKind::Open => self.open_path(&path),
                    PromptKind::Save => self.save_path(&path),
                }
            }
        }
    }

    /// Invokes the handler registered for `id`. Returns `false` (and does
    /// nothing) when the command has no handler.
    pub fn invoke(&mut self, id: CommandId) -> bool {
        match self.commands.resolve(id) {
            Some(handler) => {
                handler(self);
                // Commands that touch the text content move the thumb.
                if id.is_edit_command() || id.is_file_command() {
                    self.sync_scrollbar();
                }
                true
            }
            None => {
                tracing::debug!(command = id.name(), "command has no handler");
                false
            }
        }
    }

    /// Activates a widget, e.g. on click: enabled widgets with a resolvable
    /// command run it, everything else is a no-op.
    pub fn activate(&mut self, key: WidgetKey) -> bool {
        match self.tree.activate(key) {
            Some(id) => self.invoke(id),
            None => false,
        }
    }

    // ==================== 状态栏 / 进度条 ====================

    pub fn set_status(&mut self, text: &str) {
        let Some(key) = self.registry.lookup("status_label") else {
            return;
        };
        if let Some(widget) = self.tree.get_mut(key) {
            if let WidgetKind::Label { text: label } = &mut widget.kind {
                *label = text.to_string();
            }
        }
    }

    pub fn status_text(&self) -> Option<String> {
        let key = self.registry.lookup("status_label")?;
        match &self.tree.get(key)?.kind {
            WidgetKind::Label { text } => Some(text.clone()),
            _ => None,
        }
    }

    pub fn show_progress(&mut self) {
        self.set_progress_running(true);
    }

    pub fn hide_progress(&mut self) {
        self.set_progress_running(false);
    }

    fn set_progress_running(&mut self, on: bool) {
        let Some(key) = self.registry.lookup("progress_bar") else {
            return;
        };
        if let Some(widget) = self.tree.get_mut(key) {
            if let WidgetKind::Progressbar { running, .. } = &mut widget.kind {
                *running = on;
            }
        }
    }

    // ==================== 访问器 ====================

    fn with_text_area<R>(&mut self, f: impl FnOnce(&mut TextAreaState) -> R) -> Option<R> {
        let key = self.registry.lookup("text_area")?;
        let area = self.tree.text_area_mut(key)?;
        Some(f(area))
    }

    pub fn text(&self) -> String {
        self.registry
            .lookup("text_area")
            .and_then(|key| self.tree.text_area(key))
            .map(|area| area.text())
            .unwrap_or_default()
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn commands(&self) -> &CommandTable<Self> {
        &self.commands
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn prompt(&self) -> Option<&PathPrompt> {
        self.prompt.as_ref()
    }

    pub fn modal(&self) -> Option<&ModalDialog> {
        self.modal.as_ref()
    }

    pub fn menubar(&self) -> Option<WidgetKey> {
        self.menubar
    }

    pub fn toolbar(&self) -> Option<WidgetKey> {
        self.toolbar
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        tracing::info!("quit requested");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/main_window.rs"]
mod tests;

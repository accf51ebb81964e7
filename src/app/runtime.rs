//! 事件循环：终端初始化、按键分发、退出时恢复终端
//!
//! 单线程事件驱动：命令在触发它的按键回调里同步跑完。

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::theme::UiTheme;
use crate::config::Settings;
use crate::render;
use crate::shell::{InputKey, KeyChord, MainWindow};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Application {
    settings: Settings,
    window: MainWindow,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        tracing::info!(
            app = %settings.app_name,
            version = %settings.app_version,
            "starting application"
        );
        let window = MainWindow::new(&settings);
        Self { settings, window }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn window(&self) -> &MainWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut MainWindow {
        &mut self.window
    }

    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        tracing::info!("application closing");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while !self.window.should_quit() {
            let theme = UiTheme::for_kind(self.window.theme());
            terminal.draw(|frame| render::draw(frame, &self.window, &theme))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => self.dispatch_key(key),
                _ => {}
            }
        }
        Ok(())
    }

    fn dispatch_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char(ch) if ctrl => self.window.handle_chord(KeyChord { ctrl, shift, ch }),
            KeyCode::Char(ch) => self.window.handle_input(InputKey::Char(ch)),
            KeyCode::Enter => self.window.handle_input(InputKey::Enter),
            KeyCode::Backspace => self.window.handle_input(InputKey::Backspace),
            KeyCode::Esc => {
                // Esc plays the window-close role when nothing modal is up.
                if self.window.prompt().is_some() || self.window.modal().is_some() {
                    self.window.handle_input(InputKey::Esc);
                } else {
                    self.window.request_quit();
                }
            }
            _ => {}
        }
    }
}

//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use serde::{Deserialize, Serialize};

/// Which of the two shipped palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }
}

#[cfg(feature = "tui")]
pub use palette::UiTheme;

#[cfg(feature = "tui")]
mod palette {
    use ratatui::style::Color;

    use super::ThemeKind;

    #[derive(Debug, Clone)]
    pub struct UiTheme {
        pub background: Color,
        pub text_fg: Color,
        pub muted_fg: Color,
        pub accent_fg: Color,
        pub border: Color,
        pub menubar_bg: Color,
        pub menubar_fg: Color,
        pub button_fg: Color,
        pub button_disabled_fg: Color,
        pub separator: Color,
        pub status_fg: Color,
        pub selection_bg: Color,
        pub modal_border: Color,
        pub modal_fg: Color,
        pub progress_fg: Color,
    }

    impl UiTheme {
        pub fn for_kind(kind: ThemeKind) -> Self {
            match kind {
                ThemeKind::Dark => Self::dark(),
                ThemeKind::Light => Self::light(),
            }
        }

        pub fn dark() -> Self {
            Self {
                background: Color::Reset,
                text_fg: Color::Indexed(15),
                muted_fg: Color::Indexed(8),
                accent_fg: Color::Indexed(6),
                border: Color::Indexed(8),
                menubar_bg: Color::Indexed(8),
                menubar_fg: Color::Indexed(15),
                button_fg: Color::Indexed(14),
                button_disabled_fg: Color::Indexed(8),
                separator: Color::Indexed(8),
                status_fg: Color::Indexed(7),
                selection_bg: Color::Indexed(4),
                modal_border: Color::Indexed(1),
                modal_fg: Color::Indexed(15),
                progress_fg: Color::Indexed(6),
            }
        }

        pub fn light() -> Self {
            Self {
                background: Color::Reset,
                text_fg: Color::Indexed(0),
                muted_fg: Color::Indexed(7),
                accent_fg: Color::Indexed(4),
                border: Color::Indexed(7),
                menubar_bg: Color::Indexed(7),
                menubar_fg: Color::Indexed(0),
                button_fg: Color::Indexed(4),
                button_disabled_fg: Color::Indexed(7),
                separator: Color::Indexed(7),
                status_fg: Color::Indexed(0),
                selection_bg: Color::Indexed(12),
                modal_border: Color::Indexed(1),
                modal_fg: Color::Indexed(0),
                progress_fg: Color::Indexed(4),
            }
        }
    }
}

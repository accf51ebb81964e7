//! 快捷键表：固定的加速键绑定
//!
//! 绑定查到的只是 CommandId；是否真的有处理函数仍由 CommandTable 决定，
//! 解析不到的快捷键按下后什么也不发生。

use rustc_hash::FxHashMap;

use crate::commands::CommandId;

/// A normalized key chord. Letters are stored lowercase; the shift flag
/// distinguishes e.g. Ctrl+S from Ctrl+Shift+S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub ch: char,
}

impl KeyChord {
    pub fn ctrl(ch: char) -> Self {
        Self {
            ctrl: true,
            shift: false,
            ch: ch.to_ascii_lowercase(),
        }
    }

    pub fn ctrl_shift(ch: char) -> Self {
        Self {
            ctrl: true,
            shift: true,
            ch: ch.to_ascii_lowercase(),
        }
    }
}

pub struct Keymap {
    bindings: FxHashMap<KeyChord, CommandId>,
}

impl Default for Keymap {
    /// The fixed accelerator table: Ctrl+N/O/S, Ctrl+Shift+S, Ctrl+Q,
    /// Ctrl+X/C/V/A.
    fn default() -> Self {
        let mut keymap = Self {
            bindings: FxHashMap::default(),
        };
        keymap.bind(KeyChord::ctrl('n'), CommandId::NewFile);
        keymap.bind(KeyChord::ctrl('o'), CommandId::OpenFile);
        keymap.bind(KeyChord::ctrl('s'), CommandId::SaveFile);
        keymap.bind(KeyChord::ctrl_shift('s'), CommandId::SaveAsFile);
        keymap.bind(KeyChord::ctrl('q'), CommandId::ExitApp);
        keymap.bind(KeyChord::ctrl('x'), CommandId::Cut);
        keymap.bind(KeyChord::ctrl('c'), CommandId::Copy);
        keymap.bind(KeyChord::ctrl('v'), CommandId::Paste);
        keymap.bind(KeyChord::ctrl('a'), CommandId::SelectAll);
        keymap
    }
}

impl Keymap {
    pub fn bind(&mut self, chord: KeyChord, command: CommandId) {
        self.bindings.insert(chord, command);
    }

    pub fn lookup(&self, chord: KeyChord) -> Option<CommandId> {
        let normalized = KeyChord {
            ch: chord.ch.to_ascii_lowercase(),
            ..chord
        };
        self.bindings.get(&normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

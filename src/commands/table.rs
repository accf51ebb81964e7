//! 命令表：CommandId 到处理函数的类型化映射
//!
//! 表在窗口构建前构造一次，之后只读。查不到的命令返回 None，
//! 构建器据此把控件降级为禁用态，绝不 panic。

use rustc_hash::FxHashMap;

use super::CommandId;

/// A zero-argument handler operation on the command-handler object `H`.
pub type CommandFn<H> = fn(&mut H);

pub struct CommandTable<H> {
    entries: FxHashMap<CommandId, CommandFn<H>>,
}

impl<H> Default for CommandTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> CommandTable<H> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    pub fn register(&mut self, id: CommandId, handler: CommandFn<H>) {
        if self.entries.insert(id, handler).is_some() {
            tracing::warn!(command = id.name(), "command handler re-registered");
        }
    }

    /// Returns the handler for `id`, or `None` when the handler object
    /// exposes no matching operation.
    pub fn resolve(&self, id: CommandId) -> Option<CommandFn<H>> {
        self.entries.get(&id).copied()
    }

    pub fn contains(&self, id: CommandId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

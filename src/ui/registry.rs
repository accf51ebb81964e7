//! Named widget registry.
//!
//! Populated during one build pass; looked up afterwards to cross-wire
//! dependent widgets. A colliding name keeps the last-built widget (current,
//! documented behavior) and logs a warning so collisions are at least
//! visible in the logs.

use rustc_hash::FxHashMap;

use super::widget::WidgetKey;

#[derive(Default)]
pub struct WidgetRegistry {
    widgets: FxHashMap<String, WidgetKey>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, key: WidgetKey) {
        if let Some(previous) = self.widgets.insert(name.to_string(), key) {
            if previous != key {
                tracing::warn!(name, "widget name collision, last registration wins");
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<WidgetKey> {
        self.widgets.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.widgets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

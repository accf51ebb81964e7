//! UI layer: retained widget tree, named registry, and the three builders.
//!
//! The widget arena is toolkit-independent; `ratatui` types only appear in
//! the `render` module behind the `tui` feature.

pub mod build;
pub mod registry;
pub mod widget;

pub use build::{LayoutBuilder, MenuBuilder, ToolbarBuilder};
pub use registry::WidgetRegistry;
pub use widget::{Attach, Placement, Widget, WidgetKey, WidgetKind, WidgetTree};

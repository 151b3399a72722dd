//! The retained widget tree: arena, node types, and ids.

pub mod arena;
pub mod node;

pub use arena::WidgetTree;
pub use node::{WidgetId, WidgetKind, WidgetNode};

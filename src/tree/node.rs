//! Node types: WidgetId, WidgetNode, and the closed widget variant set.

use slotmap::new_key_type;

use crate::geometry::Rect;
use crate::widget::label::Label;
use crate::widget::status_bar::StatusBar;
use crate::widget::vertical_menu::VerticalMenu;

new_key_type! {
    /// Unique identifier for a widget in the tree. Copy, lightweight (u64).
    pub struct WidgetId;
}

/// The closed set of widget kinds the tree can hold.
///
/// Rendering and event precedence dispatch over this fixed set; there is no
/// open-ended widget registry.
#[derive(Debug)]
pub enum WidgetKind {
    /// A plain background region, used as an application root.
    Panel,
    /// A single line of text.
    Label(Label),
    /// A vertical scrolling menu; its rows are child labels.
    Menu(VerticalMenu),
    /// A keyboard-indicator row; its fields are child labels.
    StatusBar(StatusBar),
}

/// A single node in the widget tree.
#[derive(Debug)]
pub struct WidgetNode {
    /// Area relative to the parent's origin.
    pub area: Rect,
    /// Invisible nodes are skipped during redraw, subtree included.
    pub visible: bool,
    /// The widget stored at this node.
    pub widget: WidgetKind,
}

impl WidgetNode {
    /// Create a visible node with the given area and widget.
    pub fn new(area: Rect, widget: WidgetKind) -> Self {
        Self { area, visible: true, widget }
    }

    /// Shorthand for a visible [`WidgetKind::Panel`] node.
    pub fn panel(area: Rect) -> Self {
        Self::new(area, WidgetKind::Panel)
    }

    /// Shorthand for a visible [`WidgetKind::Label`] node.
    pub fn label(area: Rect, label: Label) -> Self {
        Self::new(area, WidgetKind::Label(label))
    }
}

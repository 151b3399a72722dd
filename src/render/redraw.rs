//! Recursive clipped redraw of a widget tree.
//!
//! Every widget paints inside `effective = own absolute area ∩ inherited
//! clip`. An empty intersection, or an invisible node, prunes the whole
//! subtree. Children are painted after their parent in insertion order, so a
//! later sibling overdraws an earlier one.

use crate::geometry::{Offset, Rect};
use crate::render::buffer::FrameBuffer;
use crate::theme::Theme;
use crate::tree::{WidgetId, WidgetKind, WidgetNode, WidgetTree};

/// Redraw the whole tree from `root` into `frame`.
pub fn redraw_tree(tree: &WidgetTree, root: WidgetId, theme: &Theme, frame: &mut FrameBuffer) {
    redraw(tree, root, frame.rect(), Offset::ZERO, theme, frame);
}

/// Redraw `id` and its descendants.
///
/// `clip` is the inherited clip in absolute coordinates; `origin` is the
/// absolute position of the parent's top-left corner.
pub fn redraw(
    tree: &WidgetTree,
    id: WidgetId,
    clip: Rect,
    origin: Offset,
    theme: &Theme,
    frame: &mut FrameBuffer,
) {
    let node = match tree.get(id) {
        Some(node) => node,
        None => return,
    };
    if !node.visible {
        return;
    }
    let absolute = node.area.translate(origin);
    let effective = absolute.intersection(clip);
    if effective.is_empty() {
        return;
    }

    paint(node, absolute, effective, theme, frame);

    for &child in tree.children(id) {
        redraw(tree, child, effective, absolute.offset(), theme, frame);
    }
}

fn paint(node: &WidgetNode, absolute: Rect, effective: Rect, theme: &Theme, frame: &mut FrameBuffer) {
    match node.widget {
        WidgetKind::Panel | WidgetKind::Menu(_) | WidgetKind::StatusBar(_) => {
            frame.fill_rect(effective, theme.background);
        }
        WidgetKind::Label(ref label) => {
            let (fg, bg) = label.colors(theme);
            frame.fill_rect(effective, bg);
            frame.draw_text(absolute.offset(), label.text(), fg, bg, effective);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

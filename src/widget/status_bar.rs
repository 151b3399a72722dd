//! Status bar: one row of keyboard-indicator fields.
//!
//! Shows which host lock indicators are lit. Lit fields are drawn inverted in
//! the primary text color; unlit fields stay muted. Refreshed from the latest
//! indicator snapshot once per tick, never from the platform callback.

use crate::event::indicator::Indicators;
use crate::geometry::Rect;
use crate::tree::{WidgetId, WidgetKind, WidgetNode, WidgetTree};
use crate::widget::label::{Label, Tone};

const FIELD_WIDTH: i32 = 3;
const FIELD_GAP: i32 = 1;

/// The indicator fields, left to right: CAP, NUM, SCR.
#[derive(Debug)]
pub struct StatusBar {
    caps: WidgetId,
    num: WidgetId,
    scroll: WidgetId,
}

impl StatusBar {
    /// Mount a status bar under `parent` covering `area` (parent-relative).
    pub fn mount(tree: &mut WidgetTree, parent: WidgetId, area: Rect) -> WidgetId {
        let placeholder = WidgetId::default();
        let bar_id = tree.insert_child(
            parent,
            WidgetNode::new(
                area,
                WidgetKind::StatusBar(StatusBar {
                    caps: placeholder,
                    num: placeholder,
                    scroll: placeholder,
                }),
            ),
        );

        let mut fields = [WidgetId::default(); 3];
        for (slot, text) in ["CAP", "NUM", "SCR"].into_iter().enumerate() {
            let x = slot as i32 * (FIELD_WIDTH + FIELD_GAP);
            fields[slot] = tree.insert_child(
                bar_id,
                WidgetNode::label(Rect::new(x, 0, FIELD_WIDTH, 1), Label::with_tone(text, Tone::Muted)),
            );
        }
        let [caps, num, scroll] = fields;

        if let Some(WidgetKind::StatusBar(bar)) = tree.get_mut(bar_id).map(|n| &mut n.widget) {
            bar.caps = caps;
            bar.num = num;
            bar.scroll = scroll;
        }
        bar_id
    }

    /// The CAP field label id.
    pub fn caps_id(&self) -> WidgetId {
        self.caps
    }

    /// The NUM field label id.
    pub fn num_id(&self) -> WidgetId {
        self.num
    }

    /// The SCR field label id.
    pub fn scroll_id(&self) -> WidgetId {
        self.scroll
    }

    /// Refresh the fields from an indicator snapshot.
    pub fn set_indicators(tree: &mut WidgetTree, id: WidgetId, state: Indicators) {
        let (caps, num, scroll) = match tree.status_bar(id) {
            Some(bar) => (bar.caps, bar.num, bar.scroll),
            None => return,
        };
        let fields = [
            (caps, state.contains(Indicators::CAPS)),
            (num, state.contains(Indicators::NUM)),
            (scroll, state.contains(Indicators::SCROLL)),
        ];
        for (field, lit) in fields {
            if let Some(label) = tree.label_mut(field) {
                label.set_inverted(lit);
                label.set_tone(if lit { Tone::Normal } else { Tone::Muted });
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> (WidgetTree, WidgetId) {
        let mut tree = WidgetTree::new();
        let root = tree.insert(WidgetNode::panel(Rect::new(0, 0, 30, 16)));
        let bar = StatusBar::mount(&mut tree, root, Rect::new(0, 0, 30, 1));
        (tree, bar)
    }

    #[test]
    fn mount_creates_three_fields() {
        let (tree, id) = mounted();
        assert_eq!(tree.children(id).len(), 3);
        let bar = tree.status_bar(id).unwrap();
        assert_eq!(tree.label(bar.caps_id()).unwrap().text(), "CAP");
        assert_eq!(tree.label(bar.num_id()).unwrap().text(), "NUM");
        assert_eq!(tree.label(bar.scroll_id()).unwrap().text(), "SCR");
    }

    #[test]
    fn fields_are_spaced_left_to_right() {
        let (tree, id) = mounted();
        let bar = tree.status_bar(id).unwrap();
        assert_eq!(tree.area(bar.caps_id()).x, 0);
        assert_eq!(tree.area(bar.num_id()).x, 4);
        assert_eq!(tree.area(bar.scroll_id()).x, 8);
    }

    #[test]
    fn all_fields_start_unlit() {
        let (tree, id) = mounted();
        let bar = tree.status_bar(id).unwrap();
        for field in [bar.caps_id(), bar.num_id(), bar.scroll_id()] {
            let label = tree.label(field).unwrap();
            assert!(!label.inverted());
            assert_eq!(label.tone(), Tone::Muted);
        }
    }

    #[test]
    fn lit_fields_are_inverted() {
        let (mut tree, id) = mounted();
        StatusBar::set_indicators(&mut tree, id, Indicators::CAPS | Indicators::SCROLL);
        let bar = tree.status_bar(id).unwrap();
        assert!(tree.label(bar.caps_id()).unwrap().inverted());
        assert!(!tree.label(bar.num_id()).unwrap().inverted());
        assert!(tree.label(bar.scroll_id()).unwrap().inverted());
    }

    #[test]
    fn clearing_restores_muted_fields() {
        let (mut tree, id) = mounted();
        StatusBar::set_indicators(&mut tree, id, Indicators::NUM);
        StatusBar::set_indicators(&mut tree, id, Indicators::NONE);
        let bar = tree.status_bar(id).unwrap();
        let label = tree.label(bar.num_id()).unwrap();
        assert!(!label.inverted());
        assert_eq!(label.tone(), Tone::Muted);
    }
}

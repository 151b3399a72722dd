//! Vertical scrolling menu: a fixed pool of row labels over a [`MenuBar`].
//!
//! One label per viewport row, created once at mount and reused across every
//! selection change; the device redraws menus constantly and must not churn
//! allocations. A cursor glyph tracks the selected row; edge glyphs appear
//! only while items are scrolled off in that direction.

use crate::event::notification::{Notification, NotificationCode};
use crate::geometry::Rect;
use crate::tree::{WidgetId, WidgetKind, WidgetNode, WidgetTree};
use crate::widget::label::{Label, Tone};
use crate::widget::menu::{MenuBar, MenuItem};

const CURSOR_GLYPH: &str = "\u{25B6}";
const UP_GLYPH: &str = "\u{25B2}";
const DOWN_GLYPH: &str = "\u{25BC}";

/// A vertical menu widget. Its visual parts are child labels in the tree;
/// the selection logic lives in the embedded [`MenuBar`].
#[derive(Debug)]
pub struct VerticalMenu {
    bar: MenuBar,
    rows: Vec<WidgetId>,
    cursor: WidgetId,
    up: WidgetId,
    down: WidgetId,
}

impl VerticalMenu {
    /// Mount a menu under `parent` covering `area` (parent-relative).
    ///
    /// The viewport capacity is the area height; rows are inset one cell on
    /// each side for the cursor and scroll glyph columns.
    pub fn mount(
        tree: &mut WidgetTree,
        parent: WidgetId,
        area: Rect,
        items: Vec<MenuItem>,
    ) -> WidgetId {
        let capacity = area.height.max(0) as usize;
        let bar = MenuBar::new(items, capacity);
        let placeholder = WidgetId::default();
        let menu_id = tree.insert_child(
            parent,
            WidgetNode::new(
                area,
                WidgetKind::Menu(VerticalMenu {
                    bar,
                    rows: Vec::new(),
                    cursor: placeholder,
                    up: placeholder,
                    down: placeholder,
                }),
            ),
        );

        let mut rows = Vec::with_capacity(capacity);
        for i in 0..capacity {
            let row_area = Rect::new(1, i as i32, (area.width - 2).max(0), 1);
            rows.push(tree.insert_child(menu_id, WidgetNode::label(row_area, Label::new(""))));
        }
        let cursor = tree.insert_child(
            menu_id,
            WidgetNode::label(Rect::new(0, 0, 1, 1), Label::with_tone(CURSOR_GLYPH, Tone::Accent)),
        );
        let up = tree.insert_child(
            menu_id,
            WidgetNode::label(Rect::new(area.width - 1, 0, 1, 1), Label::with_tone(" ", Tone::Accent)),
        );
        let down = tree.insert_child(
            menu_id,
            WidgetNode::label(
                Rect::new(area.width - 1, area.height - 1, 1, 1),
                Label::with_tone(" ", Tone::Accent),
            ),
        );

        if let Some(menu) = tree.menu_mut(menu_id) {
            menu.rows = rows;
            menu.cursor = cursor;
            menu.up = up;
            menu.down = down;
        }
        Self::sync(tree, menu_id);
        menu_id
    }

    /// The selection state.
    pub fn bar(&self) -> &MenuBar {
        &self.bar
    }

    /// The pooled row label ids, top to bottom.
    pub fn rows(&self) -> &[WidgetId] {
        &self.rows
    }

    /// The cursor glyph label id.
    pub fn cursor_id(&self) -> WidgetId {
        self.cursor
    }

    /// The up-scroll glyph label id.
    pub fn up_id(&self) -> WidgetId {
        self.up
    }

    /// The down-scroll glyph label id.
    pub fn down_id(&self) -> WidgetId {
        self.down
    }

    /// Move the cursor one row down.
    ///
    /// Emits [`NotificationCode::SelectionChanged`] when the cursor moved.
    pub fn select_next(tree: &mut WidgetTree, id: WidgetId) -> Option<Notification> {
        let moved = tree.menu_mut(id)?.bar.select_next();
        if !moved {
            return None;
        }
        Self::sync(tree, id);
        let index = tree.menu(id)?.bar.selected();
        Some(Notification::new(NotificationCode::SelectionChanged { index }, id))
    }

    /// Move the cursor one row up.
    ///
    /// Emits [`NotificationCode::SelectionChanged`] when the cursor moved.
    pub fn select_previous(tree: &mut WidgetTree, id: WidgetId) -> Option<Notification> {
        let moved = tree.menu_mut(id)?.bar.select_previous();
        if !moved {
            return None;
        }
        Self::sync(tree, id);
        let index = tree.menu(id)?.bar.selected();
        Some(Notification::new(NotificationCode::SelectionChanged { index }, id))
    }

    /// Activate the selected item, if the menu has one.
    ///
    /// Emits [`NotificationCode::ItemActivated`]; an empty menu yields `None`.
    pub fn activate(tree: &WidgetTree, id: WidgetId) -> Option<Notification> {
        let bar = &tree.menu(id)?.bar;
        let item = bar.selected_item()?;
        Some(Notification::new(
            NotificationCode::ItemActivated { index: bar.selected(), entry: item.id.clone() },
            id,
        ))
    }

    /// Replace the item list, resetting the cursor to the top.
    pub fn set_items(tree: &mut WidgetTree, id: WidgetId, items: Vec<MenuItem>) {
        if let Some(menu) = tree.menu_mut(id) {
            menu.bar.set_items(items);
        }
        Self::sync(tree, id);
    }

    /// Rewrite the pooled labels from the current window: row texts, the
    /// inverted selection row, the cursor position, and the edge glyphs.
    fn sync(tree: &mut WidgetTree, id: WidgetId) {
        let (rows, cursor, up, down, window, selected, texts, above, below) = {
            let menu = match tree.menu(id) {
                Some(m) => m,
                None => return,
            };
            let window = menu.bar.window();
            let texts: Vec<String> =
                window.clone().map(|i| menu.bar.items()[i].label.clone()).collect();
            (
                menu.rows.clone(),
                menu.cursor,
                menu.up,
                menu.down,
                window,
                menu.bar.selected(),
                texts,
                menu.bar.has_hidden_above(),
                menu.bar.has_hidden_below(),
            )
        };

        for &row in &rows {
            if let Some(label) = tree.label_mut(row) {
                label.set_text("");
                label.set_inverted(false);
            }
        }

        let mut cursor_row = None;
        for (slot, index) in window.enumerate() {
            if let Some(label) = tree.label_mut(rows[slot]) {
                label.set_text(texts[slot].clone());
                label.set_inverted(index == selected);
            }
            if index == selected {
                cursor_row = Some(slot as i32);
            }
        }

        match cursor_row {
            Some(y) => {
                tree.move_to(cursor, 0, y);
                tree.set_visible(cursor, true);
            }
            None => tree.set_visible(cursor, false),
        }

        if let Some(label) = tree.label_mut(up) {
            label.set_text(if above { UP_GLYPH } else { " " });
        }
        if let Some(label) = tree.label_mut(down) {
            label.set_text(if below { DOWN_GLYPH } else { " " });
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::notification::NotificationCode;
    use crate::widget::menu::EntryId;

    fn items(labels: &[&str]) -> Vec<MenuItem> {
        labels.iter().map(|l| MenuItem::new(*l, EntryId::new(*l))).collect()
    }

    /// Root panel with a 3-row menu over five items.
    fn mounted() -> (WidgetTree, WidgetId) {
        let mut tree = WidgetTree::new();
        let root = tree.insert(WidgetNode::panel(Rect::new(0, 0, 20, 10)));
        let menu = VerticalMenu::mount(
            &mut tree,
            root,
            Rect::new(0, 1, 20, 3),
            items(&["alpha", "bravo", "charlie", "delta", "echo"]),
        );
        (tree, menu)
    }

    fn row_texts(tree: &WidgetTree, id: WidgetId) -> Vec<String> {
        tree.menu(id)
            .unwrap()
            .rows()
            .iter()
            .map(|&row| tree.label(row).unwrap().text().to_owned())
            .collect()
    }

    fn inverted_rows(tree: &WidgetTree, id: WidgetId) -> Vec<bool> {
        tree.menu(id)
            .unwrap()
            .rows()
            .iter()
            .map(|&row| tree.label(row).unwrap().inverted())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Mounting
    // -----------------------------------------------------------------------

    #[test]
    fn mount_creates_row_pool_and_glyphs() {
        let (tree, id) = mounted();
        let menu = tree.menu(id).unwrap();
        assert_eq!(menu.rows().len(), 3);
        assert_eq!(menu.bar().items_on_display(), 3);
        // 3 rows + cursor + up + down
        assert_eq!(tree.children(id).len(), 6);
    }

    #[test]
    fn rows_are_inset_for_glyph_columns() {
        let (tree, id) = mounted();
        let menu = tree.menu(id).unwrap();
        assert_eq!(tree.area(menu.rows()[0]), Rect::new(1, 0, 18, 1));
        assert_eq!(tree.area(menu.rows()[2]), Rect::new(1, 2, 18, 1));
        assert_eq!(tree.area(menu.up_id()), Rect::new(19, 0, 1, 1));
        assert_eq!(tree.area(menu.down_id()), Rect::new(19, 2, 1, 1));
    }

    #[test]
    fn initial_window_fills_rows() {
        let (tree, id) = mounted();
        assert_eq!(row_texts(&tree, id), vec!["alpha", "bravo", "charlie"]);
        assert_eq!(inverted_rows(&tree, id), vec![true, false, false]);
    }

    // -----------------------------------------------------------------------
    // Selection and row reuse
    // -----------------------------------------------------------------------

    #[test]
    fn select_next_inverts_only_selected_row() {
        let (mut tree, id) = mounted();
        VerticalMenu::select_next(&mut tree, id);
        assert_eq!(inverted_rows(&tree, id), vec![false, true, false]);
    }

    #[test]
    fn scrolling_reuses_row_labels() {
        let (mut tree, id) = mounted();
        let rows_before = tree.menu(id).unwrap().rows().to_vec();
        for _ in 0..3 {
            VerticalMenu::select_next(&mut tree, id);
        }
        assert_eq!(tree.menu(id).unwrap().rows(), rows_before.as_slice());
        assert_eq!(row_texts(&tree, id), vec!["bravo", "charlie", "delta"]);
        assert_eq!(inverted_rows(&tree, id), vec![false, false, true]);
    }

    #[test]
    fn cursor_follows_selected_row() {
        let (mut tree, id) = mounted();
        let cursor = tree.menu(id).unwrap().cursor_id();
        assert_eq!(tree.area(cursor).offset().y, 0);

        VerticalMenu::select_next(&mut tree, id);
        assert_eq!(tree.area(cursor).offset().y, 1);

        // Window slides with the cursor at the bottom edge.
        VerticalMenu::select_next(&mut tree, id);
        VerticalMenu::select_next(&mut tree, id);
        assert_eq!(tree.area(cursor).offset().y, 2);
    }

    #[test]
    fn selection_change_is_notified() {
        let (mut tree, id) = mounted();
        let note = VerticalMenu::select_next(&mut tree, id).unwrap();
        assert_eq!(note.origin, id);
        assert_eq!(note.code, NotificationCode::SelectionChanged { index: 1 });
    }

    #[test]
    fn clamped_move_is_silent() {
        let (mut tree, id) = mounted();
        assert!(VerticalMenu::select_previous(&mut tree, id).is_none());
        for _ in 0..4 {
            VerticalMenu::select_next(&mut tree, id);
        }
        assert!(VerticalMenu::select_next(&mut tree, id).is_none());
    }

    // -----------------------------------------------------------------------
    // Scroll glyphs
    // -----------------------------------------------------------------------

    #[test]
    fn edge_glyphs_track_hidden_items() {
        let (mut tree, id) = mounted();
        let (up, down) = {
            let menu = tree.menu(id).unwrap();
            (menu.up_id(), menu.down_id())
        };
        assert_eq!(tree.label(up).unwrap().text(), " ");
        assert_eq!(tree.label(down).unwrap().text(), DOWN_GLYPH);

        for _ in 0..4 {
            VerticalMenu::select_next(&mut tree, id);
        }
        assert_eq!(tree.label(up).unwrap().text(), UP_GLYPH);
        assert_eq!(tree.label(down).unwrap().text(), " ");
    }

    // -----------------------------------------------------------------------
    // Activation
    // -----------------------------------------------------------------------

    #[test]
    fn activate_reports_selected_entry() {
        let (mut tree, id) = mounted();
        VerticalMenu::select_next(&mut tree, id);
        let note = VerticalMenu::activate(&tree, id).unwrap();
        assert_eq!(
            note.code,
            NotificationCode::ItemActivated { index: 1, entry: EntryId::new("bravo") },
        );
    }

    #[test]
    fn activate_on_empty_menu_is_none() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(WidgetNode::panel(Rect::new(0, 0, 20, 10)));
        let id = VerticalMenu::mount(&mut tree, root, Rect::new(0, 0, 20, 3), Vec::new());
        assert!(VerticalMenu::activate(&tree, id).is_none());
    }

    // -----------------------------------------------------------------------
    // Item replacement
    // -----------------------------------------------------------------------

    #[test]
    fn set_items_resets_to_top() {
        let (mut tree, id) = mounted();
        for _ in 0..4 {
            VerticalMenu::select_next(&mut tree, id);
        }
        VerticalMenu::set_items(&mut tree, id, items(&["one", "two"]));
        assert_eq!(row_texts(&tree, id), vec!["one", "two", ""]);
        assert_eq!(inverted_rows(&tree, id), vec![true, false, false]);
        assert_eq!(tree.menu(id).unwrap().bar().selected(), 0);
    }

    #[test]
    fn empty_items_blank_all_rows_and_hide_cursor() {
        let (mut tree, id) = mounted();
        VerticalMenu::set_items(&mut tree, id, Vec::new());
        assert_eq!(row_texts(&tree, id), vec!["", "", ""]);
        let cursor = tree.menu(id).unwrap().cursor_id();
        assert!(!tree.get(cursor).unwrap().visible);
    }
}

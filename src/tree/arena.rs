//! Tree operations: insert, remove, walk.
//!
//! All widgets of one application live in a single slotmap arena. A parent
//! exclusively owns its children: removing a node tears down its whole subtree,
//! children before parents. The parent link is a non-owning lookup only.

use slotmap::{SecondaryMap, SlotMap};

use crate::geometry::Rect;
use crate::widget::label::Label;
use crate::widget::status_bar::StatusBar;
use crate::widget::vertical_menu::VerticalMenu;

use super::node::{WidgetId, WidgetKind, WidgetNode};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

/// The widget tree of one application, backed by a slotmap arena.
///
/// Children keep insertion order, which doubles as z-order for rendering and
/// precedence for event delivery.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, WidgetNode>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: Option<WidgetId>,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, node: WidgetNode) -> WidgetId {
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: WidgetId, node: WidgetNode) -> WidgetId {
        debug_assert!(self.nodes.contains_key(parent), "parent node does not exist");
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(id);
        id
    }

    /// Remove a node and all its descendants, children before parents.
    ///
    /// Returns the removed node itself, or `None` if it didn't exist.
    pub fn remove(&mut self, id: WidgetId) -> Option<WidgetNode> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from the parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut removed = None;
        for current in self.post_order(id) {
            self.children.remove(current);
            self.parent.remove(current);
            let node = self.nodes.remove(current);
            if current == id {
                removed = node;
            }
        }
        removed
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node in insertion order. Returns an empty slice
    /// if the node has no children or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node.
    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    /// Mutable access to a node.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Post-order traversal: every node appears after all its descendants.
    fn post_order(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut order = self.walk_depth_first(start);
        order.reverse();
        order
    }

    // -----------------------------------------------------------------------
    // Typed accessors
    // -----------------------------------------------------------------------

    /// The label stored at `id`, if that node is a label.
    pub fn label(&self, id: WidgetId) -> Option<&Label> {
        match self.get(id)?.widget {
            WidgetKind::Label(ref l) => Some(l),
            _ => None,
        }
    }

    /// Mutable access to the label stored at `id`.
    pub fn label_mut(&mut self, id: WidgetId) -> Option<&mut Label> {
        match self.get_mut(id)?.widget {
            WidgetKind::Label(ref mut l) => Some(l),
            _ => None,
        }
    }

    /// The menu stored at `id`, if that node is a menu.
    pub fn menu(&self, id: WidgetId) -> Option<&VerticalMenu> {
        match self.get(id)?.widget {
            WidgetKind::Menu(ref m) => Some(m),
            _ => None,
        }
    }

    /// Mutable access to the menu stored at `id`.
    pub fn menu_mut(&mut self, id: WidgetId) -> Option<&mut VerticalMenu> {
        match self.get_mut(id)?.widget {
            WidgetKind::Menu(ref mut m) => Some(m),
            _ => None,
        }
    }

    /// The status bar stored at `id`, if that node is a status bar.
    pub fn status_bar(&self, id: WidgetId) -> Option<&StatusBar> {
        match self.get(id)?.widget {
            WidgetKind::StatusBar(ref s) => Some(s),
            _ => None,
        }
    }

    /// The parent-relative area of `id`, or [`Rect::EMPTY`] if it is gone.
    pub fn area(&self, id: WidgetId) -> Rect {
        self.get(id).map(|n| n.area).unwrap_or(Rect::EMPTY)
    }

    /// Move a node to a new parent-relative position, keeping its size.
    pub fn move_to(&mut self, id: WidgetId, x: i32, y: i32) {
        if let Some(node) = self.get_mut(id) {
            node.area.x = x;
            node.area.y = y;
        }
    }

    /// Show or hide a node (and, effectively, its subtree).
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        if let Some(node) = self.get_mut(id) {
            node.visible = visible;
        }
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

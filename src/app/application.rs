//! Application: a root widget plus an off-screen render target.
//!
//! One application owns one widget tree and one [`FrameBuffer`] sized to the
//! panel. The external driver loop calls [`update`](Application::update) once
//! per tick; applets layer their own behavior on top and end their tick with
//! [`redraw`](Application::redraw).

use crate::event::notification::Dispatcher;
use crate::geometry::Rect;
use crate::render::buffer::FrameBuffer;
use crate::render::redraw::redraw_tree;
use crate::theme::Theme;
use crate::tree::{WidgetId, WidgetNode, WidgetTree};

/// The panel's native (portrait) rectangle in cells.
pub const PHYSICAL_PANEL: Rect = Rect::new(0, 0, 16, 30);

/// A root widget tree with its render target and notification queue.
pub struct Application {
    tree: WidgetTree,
    root: WidgetId,
    frame: FrameBuffer,
    theme: &'static Theme,
    dispatcher: Dispatcher,
}

impl Application {
    /// Create an application with a bare root panel covering the full frame.
    pub fn new(theme: &'static Theme) -> Self {
        let frame_rect = Self::full_frame_rect();
        let mut tree = WidgetTree::new();
        let root = tree.insert(WidgetNode::panel(frame_rect));
        let frame =
            FrameBuffer::new(frame_rect.width, frame_rect.height, theme.text, theme.background);
        Self { tree, root, frame, theme, dispatcher: Dispatcher::new() }
    }

    /// The full logical frame: the physical panel reoriented into the space
    /// applications render in.
    pub fn full_frame_rect() -> Rect {
        PHYSICAL_PANEL.to_logical()
    }

    /// The application's theme.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// The widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Mutable access to the widget tree.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    /// The root widget id.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// The application's notification queue.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// The off-screen render target.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Default per-tick behavior: repaint the tree.
    pub fn update(&mut self) {
        self.redraw();
    }

    /// Repaint the whole tree into the render target.
    pub fn redraw(&mut self) {
        redraw_tree(&self.tree, self.root, self.theme, &mut self.frame);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Widget notifications: codes, origin, and the per-application queue.
//!
//! A notification decouples the widget that detects something (a menu row was
//! activated, a widget wants its owner gone) from the code that acts on it.
//! Each application drains its own [`Dispatcher`] within the tick that emitted
//! into it, so delivery always completes before the next tick; codes the
//! application does not consume bubble out to its bound owner. Nothing is
//! queued across frames. The only deferred reaction is the loader's unload
//! flag.

use std::collections::VecDeque;

use crate::tree::WidgetId;
use crate::widget::menu::EntryId;

// ---------------------------------------------------------------------------
// NotificationCode
// ---------------------------------------------------------------------------

/// The closed set of notification kinds, payload included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationCode {
    /// The emitter asks its owner to tear it down at the next safe point.
    /// Never acted on inline; see the application loader.
    DestroyRequest,
    /// The menu cursor moved to `index`.
    SelectionChanged { index: usize },
    /// The menu item at `index` was activated.
    ItemActivated { index: usize, entry: EntryId },
}

/// A notification with its origin widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub code: NotificationCode,
    /// The widget the notification originated from.
    pub origin: WidgetId,
}

impl Notification {
    /// Create a notification from `origin`.
    pub fn new(code: NotificationCode, origin: WidgetId) -> Self {
        Self { code, origin }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Queue-based notification dispatcher, one per application.
///
/// Widget operations push here; the owning application drains the queue in the
/// same tick and is the single handler for everything in it.
#[derive(Debug, Default)]
pub struct Dispatcher {
    queue: VecDeque<Notification>,
}

impl Dispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self { queue: VecDeque::new() }
    }

    /// Enqueue a notification for this tick's drain.
    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Enqueue a notification if one was produced.
    pub fn push_maybe(&mut self, notification: Option<Notification>) {
        if let Some(n) = notification {
            self.push(n);
        }
    }

    /// Drain all pending notifications in emission order.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// Number of pending notifications.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

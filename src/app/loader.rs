//! Application loader: owns a rotating set of applet factories and hosts at
//! most one live applet.
//!
//! The loader is the bound owner of whatever it hosts: notifications the
//! applet does not consume end up here. A `DestroyRequest` only sets a flag;
//! the requesting applet finishes its tick intact and is replaced at the start
//! of the next one, so teardown never runs on the requester's own call stack.

use tracing::{debug, trace};

use crate::app::application::Application;
use crate::event::indicator::Indicators;
use crate::event::notification::{Notification, NotificationCode};
use crate::render::buffer::FrameBuffer;
use crate::theme::Theme;

/// A hosted sub-application.
pub trait Applet {
    /// Short name for lifecycle logs.
    fn name(&self) -> &str;

    /// Advance one tick. Returns notifications bound for the owner.
    fn update(&mut self) -> Vec<Notification>;

    /// Receive a forwarded indicator event.
    fn on_indicators(&mut self, state: Indicators);

    /// The applet's finished frame.
    fn frame(&self) -> &FrameBuffer;
}

/// Constructs fresh applet instances on demand.
pub trait AppletFactory {
    /// Construct a new instance.
    fn create(&self) -> Box<dyn Applet>;
}

/// Hosts one live applet out of an ordered factory sequence.
pub struct AppLoader {
    factories: Vec<Box<dyn AppletFactory>>,
    current: Option<Box<dyn Applet>>,
    pending_unload: bool,
    idle: Application,
}

impl AppLoader {
    /// Create a loader and load the front factory, if any.
    pub fn new(factories: Vec<Box<dyn AppletFactory>>, theme: &'static Theme) -> Self {
        let mut loader =
            Self { factories, current: None, pending_unload: false, idle: Application::new(theme) };
        if !loader.factories.is_empty() {
            loader.load(0);
        }
        loader
    }

    /// Construct a new instance from `factories[index]`, becoming its sole
    /// owner. Any previous instance is destroyed, widget tree first, before
    /// the new one is built.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; the loader only calls it with a
    /// checked front index.
    pub fn load(&mut self, index: usize) {
        self.current = None;
        let applet = self.factories[index].create();
        debug!(applet = applet.name(), index, "loaded applet");
        self.current = Some(applet);
    }

    /// Destroy the live applet, if any.
    pub fn unload(&mut self) {
        if let Some(applet) = self.current.take() {
            debug!(applet = applet.name(), "unloaded applet");
        }
    }

    /// Cyclically shift the factory sequence: the front factory moves to the
    /// back. Applying it once per factory restores the original order.
    pub fn rotate(&mut self) {
        if !self.factories.is_empty() {
            self.factories.rotate_left(1);
        }
    }

    /// Advance one tick.
    ///
    /// A pending unload is resolved first: rotate, then load the new front
    /// factory. Afterwards the tick is forwarded to the live applet, or the
    /// idle frame is refreshed when nothing is live.
    pub fn update(&mut self) {
        if self.pending_unload {
            self.rotate();
            if self.factories.is_empty() {
                self.unload();
            } else {
                self.load(0);
            }
            self.pending_unload = false;
        }

        let bubbled = match self.current.as_mut() {
            Some(applet) => applet.update(),
            None => {
                self.idle.update();
                Vec::new()
            }
        };
        for notification in bubbled {
            self.on_notify(notification);
        }
    }

    /// Forward an indicator event to the live applet verbatim. Dropped when
    /// nothing is live.
    pub fn on_indicators(&mut self, state: Indicators) {
        if let Some(applet) = self.current.as_mut() {
            applet.on_indicators(state);
        }
    }

    /// The frame to present: the live applet's, or the idle frame.
    pub fn frame(&self) -> &FrameBuffer {
        match self.current {
            Some(ref applet) => applet.frame(),
            None => self.idle.frame(),
        }
    }

    /// Whether an applet is live.
    pub fn has_live(&self) -> bool {
        self.current.is_some()
    }

    /// The live applet's name, if any.
    pub fn live_name(&self) -> Option<&str> {
        self.current.as_deref().map(|applet| applet.name())
    }

    /// Number of registered factories.
    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    fn on_notify(&mut self, notification: Notification) {
        match notification.code {
            NotificationCode::DestroyRequest => {
                debug!("destroy requested, deferring unload to next tick");
                self.pending_unload = true;
            }
            ref other => trace!(?other, "unhandled applet notification"),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

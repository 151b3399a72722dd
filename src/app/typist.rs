//! Typist applet: pick an entry from a menu and type it at the host.
//!
//! The device has no buttons; the host's lock keys are the input: a NUM
//! toggle moves the cursor down, CAPS moves it up, SCROLL activates. Before
//! and after typing, every lit lock is tapped clear so the typed text is not
//! corrupted by an active caps or num lock, and the machine waits for the host
//! to confirm via the indicator snapshot.
//!
//! States cycle `SelectEntry → ClearLocksBefore → TypeEntry → ClearLocksAfter`
//! and back. Comparing `previous` against the current state once per tick runs
//! each state's entry action exactly once per visit.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::app::application::Application;
use crate::app::loader::Applet;
use crate::device::{EntryListing, KeySink};
use crate::event::indicator::{IndicatorCell, Indicators};
use crate::event::notification::{Notification, NotificationCode};
use crate::geometry::Rect;
use crate::render::buffer::FrameBuffer;
use crate::theme::Theme;
use crate::tree::WidgetId;
use crate::widget::menu::{EntryId, MenuItem};
use crate::widget::status_bar::StatusBar;
use crate::widget::vertical_menu::VerticalMenu;

/// The typist's interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypistState {
    /// Menu navigation until an entry is activated.
    SelectEntry,
    /// Clear lit locks so they cannot corrupt the typed text.
    ClearLocksBefore,
    /// Type the selected entry's payload.
    TypeEntry,
    /// Clear locks the typing itself may have toggled.
    ClearLocksAfter,
}

/// Menu-driven applet that types a selected entry at the host.
pub struct TypistApp {
    ui: Application,
    menu: WidgetId,
    status: WidgetId,
    listing: Box<dyn EntryListing>,
    keys: Box<dyn KeySink>,
    indicators: Arc<IndicatorCell>,
    state: TypistState,
    previous: Option<TypistState>,
    last_seen: Indicators,
    selected: Option<EntryId>,
}

impl TypistApp {
    /// Build the applet UI: a status bar row on top, the menu below.
    pub fn new(
        theme: &'static Theme,
        listing: Box<dyn EntryListing>,
        keys: Box<dyn KeySink>,
        indicators: Arc<IndicatorCell>,
    ) -> Self {
        let mut ui = Application::new(theme);
        let root = ui.root();
        let frame = Application::full_frame_rect();
        let status =
            StatusBar::mount(ui.tree_mut(), root, Rect::new(0, 0, frame.width, 1));
        let menu = VerticalMenu::mount(
            ui.tree_mut(),
            root,
            Rect::new(0, 1, frame.width, frame.height - 1),
            Vec::new(),
        );
        Self {
            ui,
            menu,
            status,
            listing,
            keys,
            indicators,
            state: TypistState::SelectEntry,
            previous: None,
            last_seen: Indicators::NONE,
            selected: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> TypistState {
        self.state
    }

    /// The applet's UI, for inspection.
    pub fn ui(&self) -> &Application {
        &self.ui
    }

    /// The menu widget id.
    pub fn menu_id(&self) -> WidgetId {
        self.menu
    }

    // -----------------------------------------------------------------------
    // Entry actions
    // -----------------------------------------------------------------------

    fn enter(&mut self, state: TypistState) {
        match state {
            TypistState::SelectEntry => {
                let items = self.load_entries();
                VerticalMenu::set_items(self.ui.tree_mut(), self.menu, items);
                // Toggles that happened in other states are not navigation.
                self.last_seen = self.indicators.snapshot();
            }
            TypistState::ClearLocksBefore | TypistState::ClearLocksAfter => {
                self.tap_lit_locks();
            }
            TypistState::TypeEntry => self.type_selected(),
        }
    }

    fn load_entries(&mut self) -> Vec<MenuItem> {
        match self.listing.entries() {
            Ok(items) => {
                if items.is_empty() {
                    warn!("listing returned no entries, menu will be empty");
                }
                items
            }
            Err(err) => {
                warn!(error = %err, "listing failed, menu will be empty");
                Vec::new()
            }
        }
    }

    fn tap_lit_locks(&mut self) {
        for key in self.indicators.snapshot().lit_keys() {
            self.keys.tap_lock(key);
        }
    }

    fn type_selected(&mut self) {
        let Some(entry) = self.selected.clone() else {
            return;
        };
        match self.listing.secret(&entry) {
            Some(secret) => self.keys.type_text(&secret),
            None => warn!(entry = entry.as_str(), "entry vanished before typing"),
        }
    }

    // -----------------------------------------------------------------------
    // Per-state handlers, one dispatched per tick
    // -----------------------------------------------------------------------

    fn handle_select_entry(&mut self) {
        let snapshot = self.indicators.snapshot();
        let toggled = snapshot.toggled_since(self.last_seen);
        self.last_seen = snapshot;

        if toggled.contains(Indicators::NUM) {
            let note = VerticalMenu::select_next(self.ui.tree_mut(), self.menu);
            self.ui.dispatcher_mut().push_maybe(note);
        }
        if toggled.contains(Indicators::CAPS) {
            let note = VerticalMenu::select_previous(self.ui.tree_mut(), self.menu);
            self.ui.dispatcher_mut().push_maybe(note);
        }
        if toggled.contains(Indicators::SCROLL) {
            match VerticalMenu::activate(self.ui.tree(), self.menu) {
                Some(note) => self.ui.dispatcher_mut().push(note),
                // Nothing to type here: hand control to the next applet.
                None => self
                    .ui
                    .dispatcher_mut()
                    .push(Notification::new(NotificationCode::DestroyRequest, self.menu)),
            }
        }
    }

    fn handle_clear_locks_before(&mut self) {
        if self.indicators.snapshot().is_empty() {
            self.transition(TypistState::TypeEntry);
        }
    }

    fn handle_type_entry(&mut self) {
        // Typing is synchronous; the entry action already ran.
        self.transition(TypistState::ClearLocksAfter);
    }

    fn handle_clear_locks_after(&mut self) {
        if self.indicators.snapshot().is_empty() {
            self.transition(TypistState::SelectEntry);
        }
    }

    fn transition(&mut self, next: TypistState) {
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }
}

impl Applet for TypistApp {
    fn name(&self) -> &str {
        "typist"
    }

    fn update(&mut self) -> Vec<Notification> {
        if self.previous != Some(self.state) {
            self.enter(self.state);
            self.previous = Some(self.state);
        }

        match self.state {
            TypistState::SelectEntry => self.handle_select_entry(),
            TypistState::ClearLocksBefore => self.handle_clear_locks_before(),
            TypistState::TypeEntry => self.handle_type_entry(),
            TypistState::ClearLocksAfter => self.handle_clear_locks_after(),
        }

        StatusBar::set_indicators(self.ui.tree_mut(), self.status, self.indicators.snapshot());

        let mut bubbled = Vec::new();
        for notification in self.ui.dispatcher_mut().drain() {
            match notification.code {
                NotificationCode::SelectionChanged { index } => {
                    trace!(index, "menu selection moved");
                }
                NotificationCode::ItemActivated { index, ref entry } => {
                    debug!(index, entry = entry.as_str(), "entry activated");
                    self.selected = Some(entry.clone());
                    self.transition(TypistState::ClearLocksBefore);
                }
                NotificationCode::DestroyRequest => bubbled.push(notification),
            }
        }

        self.ui.redraw();
        bubbled
    }

    fn on_indicators(&mut self, state: Indicators) {
        // Forwarded platform event: land it in the same handoff cell the
        // callback writes. The tick reads it; no widget is touched here.
        self.indicators.publish(state);
    }

    fn frame(&self) -> &FrameBuffer {
        self.ui.frame()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

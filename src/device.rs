//! Device-side collaborators: the emulated keyboard and the entry listing.
//!
//! Both are trait objects so applets can be exercised against in-memory fakes.
//! Nothing here assumes an acknowledgement channel: typing is fire-and-forget,
//! and a failed or empty listing degrades to an empty menu, never an error the
//! render loop sees.

use crate::event::indicator::LockKey;
use crate::widget::menu::{EntryId, MenuItem};

/// Error from the listing collaborator.
///
/// Callers log it and fall back to an empty listing; it never propagates past
/// the applet that asked.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("listing unavailable: {0}")]
    Unavailable(String),
}

/// Enumerates the entries the device can type, and resolves their payloads.
pub trait EntryListing {
    /// The selectable entries in display order.
    fn entries(&mut self) -> Result<Vec<MenuItem>, ListingError>;

    /// The text to type for an entry, or `None` if it is gone.
    fn secret(&mut self, id: &EntryId) -> Option<String>;
}

/// The emulated keyboard: types characters at the host.
pub trait KeySink {
    /// Type the text at the host, character by character.
    fn type_text(&mut self, text: &str);

    /// Tap a lock key once, toggling the host's indicator.
    fn tap_lock(&mut self, key: LockKey);
}

// ===========================================================================
// Tests
// ===========================================================================

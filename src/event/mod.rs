//! Events: widget notifications and keyboard-indicator state.

pub mod indicator;
pub mod notification;

pub use indicator::{IndicatorCell, Indicators, LockKey};
pub use notification::{Dispatcher, Notification, NotificationCode};

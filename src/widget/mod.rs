//! Built-in widgets: label, menu abstraction, vertical menu, status bar.

pub mod label;
pub mod menu;
pub mod status_bar;
pub mod vertical_menu;

pub use label::{Label, Tone};
pub use menu::{EntryId, MenuBar, MenuItem};
pub use status_bar::StatusBar;
pub use vertical_menu::VerticalMenu;

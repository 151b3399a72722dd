//! # typedeck
//!
//! A retained-mode widget toolkit and application harness for keypad-less HID
//! devices with a small cell display. The device shows menus and status
//! indicators; the host's keyboard lock keys drive navigation; a
//! state-machine applet types selected entries back at the host.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Offset and Rect primitives with physical→logical
//!   reorientation
//! - **[`tree`]** — Slotmap-backed widget arena: ownership, z-order,
//!   children-first teardown
//! - **[`widget`]** — Built-in widgets: Label, MenuBar, VerticalMenu,
//!   StatusBar
//! - **[`event`]** — Widget notifications and the keyboard-indicator handoff
//!   cell
//! - **[`render`]** — Off-screen frame buffer, recursive clipped redraw,
//!   display surfaces
//! - **[`theme`]** — Named palettes with a guaranteed fallback
//! - **[`device`]** — Collaborator traits: entry listing and the emulated
//!   keyboard
//! - **[`app`]** — Application container, rotating loader, typist applet

// Foundation
pub mod geometry;
pub mod theme;

// Widget tree
pub mod tree;
pub mod widget;

// Events
pub mod event;

// Rendering
pub mod render;

// Collaborators
pub mod device;

// Applications
pub mod app;

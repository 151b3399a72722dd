//! Applications: the root-widget container, the rotating loader, and the
//! interactive typist applet.

pub mod application;
pub mod loader;
pub mod typist;

pub use application::{Application, PHYSICAL_PANEL};
pub use loader::{AppLoader, Applet, AppletFactory};
pub use typist::{TypistApp, TypistState};

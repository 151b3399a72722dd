//! Host-side simulator: drives the application loader in a terminal.
//!
//! The terminal stands in for both sides of the device boundary. Plain keys
//! emulate the host's lock keys (`c` caps, `n` num, `s` scroll; `q` quits),
//! and the panel frame is presented through crossterm. Typed entries are
//! reported on stderr via tracing instead of being injected anywhere.

use std::env;
use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use typedeck::app::{AppLoader, Applet, AppletFactory, TypistApp};
use typedeck::device::{EntryListing, KeySink, ListingError};
use typedeck::event::{IndicatorCell, LockKey};
use typedeck::render::{Screen, TerminalScreen};
use typedeck::theme::{self, Theme};
use typedeck::widget::menu::{EntryId, MenuItem};

const TICK: Duration = Duration::from_millis(33);

/// Listing over fixed (label, payload) pairs.
struct StaticListing {
    entries: Vec<(String, String)>,
}

impl EntryListing for StaticListing {
    fn entries(&mut self) -> Result<Vec<MenuItem>, ListingError> {
        Ok(self
            .entries
            .iter()
            .map(|(label, _)| MenuItem::new(label.clone(), EntryId::new(label.clone())))
            .collect())
    }

    fn secret(&mut self, id: &EntryId) -> Option<String> {
        self.entries.iter().find(|(label, _)| label == id.as_str()).map(|(_, s)| s.clone())
    }
}

/// Emulated keyboard: lock taps flip the simulated host indicators, typed
/// text only hits the log.
struct SimKeyboard {
    cell: Arc<IndicatorCell>,
}

impl KeySink for SimKeyboard {
    fn type_text(&mut self, text: &str) {
        info!(chars = text.chars().count(), "typed entry at host");
    }

    fn tap_lock(&mut self, key: LockKey) {
        let state = self.cell.snapshot() ^ key.flag();
        self.cell.publish(state);
    }
}

/// Builds a typist applet over a fixed entry set.
struct TypistFactory {
    theme: &'static Theme,
    cell: Arc<IndicatorCell>,
    entries: Vec<(String, String)>,
}

impl AppletFactory for TypistFactory {
    fn create(&self) -> Box<dyn Applet> {
        Box::new(TypistApp::new(
            self.theme,
            Box::new(StaticListing { entries: self.entries.clone() }),
            Box::new(SimKeyboard { cell: self.cell.clone() }),
            self.cell.clone(),
        ))
    }
}

fn demo_entries() -> Vec<(String, String)> {
    [
        ("mail", "correct horse battery"),
        ("vpn", "staple4ever"),
        ("wiki", "tr0ub4dor&3"),
        ("router", "admin123"),
        ("backup", "s3cret-sauce"),
        ("gitea", "deploy-key-7"),
    ]
    .into_iter()
    .map(|(l, s)| (l.to_owned(), s.to_owned()))
    .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let theme = theme::theme_or_default(&env::var("TYPEDECK_THEME").unwrap_or_default());
    let cell = Arc::new(IndicatorCell::new());
    let factories: Vec<Box<dyn AppletFactory>> = vec![
        Box::new(TypistFactory { theme, cell: cell.clone(), entries: demo_entries() }),
        // A spare slot: activating its empty menu rotates back around.
        Box::new(TypistFactory { theme, cell: cell.clone(), entries: Vec::new() }),
    ];
    let mut loader = AppLoader::new(factories, theme);

    let mut screen = TerminalScreen::new();
    screen.enter()?;
    let result = run(&mut loader, &cell, &mut screen);
    screen.leave()?;
    result
}

fn run(
    loader: &mut AppLoader,
    cell: &Arc<IndicatorCell>,
    screen: &mut TerminalScreen,
) -> Result<(), Box<dyn Error>> {
    let mut last = cell.snapshot();
    loop {
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let lock = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('c') => Some(LockKey::Caps),
                        KeyCode::Char('n') => Some(LockKey::Num),
                        KeyCode::Char('s') => Some(LockKey::Scroll),
                        _ => None,
                    };
                    if let Some(key) = lock {
                        cell.publish(cell.snapshot() ^ key.flag());
                    }
                }
            }
        }

        // Emulate the platform event bus: one indicator event per change.
        let snapshot = cell.snapshot();
        if snapshot != last {
            loader.on_indicators(snapshot);
            last = snapshot;
        }

        loader.update();
        screen.present(loader.frame())?;
    }
    Ok(())
}

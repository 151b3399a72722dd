//! Named color palettes.
//!
//! A [`Theme`] maps UI roles to colors. Themes are selected by name at startup;
//! an unknown name falls back to the default palette rather than failing, so a
//! misconfigured build still boots with a usable display.

use tracing::warn;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A 24-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color from RGB components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A named palette mapping UI roles to colors.
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    /// Palette name used for lookup.
    pub name: &'static str,
    /// Panel and widget background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// Selection cursor and scroll glyphs.
    pub accent: Color,
    /// De-emphasized text, e.g. unlit status indicators.
    pub muted: Color,
}

/// Green-phosphor CRT look. The default.
pub const ROBOTRON: Theme = Theme {
    name: "robotron",
    background: Color::new(4, 12, 4),
    text: Color::new(51, 255, 51),
    accent: Color::new(173, 255, 47),
    muted: Color::new(24, 100, 24),
};

/// Dark text on a light panel.
pub const PAPERWHITE: Theme = Theme {
    name: "paperwhite",
    background: Color::new(232, 227, 211),
    text: Color::new(40, 36, 30),
    accent: Color::new(150, 40, 27),
    muted: Color::new(150, 144, 130),
};

/// Amber monochrome terminal.
pub const AMBER: Theme = Theme {
    name: "amber",
    background: Color::new(16, 8, 0),
    text: Color::new(255, 176, 0),
    accent: Color::new(255, 224, 138),
    muted: Color::new(112, 66, 20),
};

/// Cool blue-grey night palette.
pub const MIDNIGHT: Theme = Theme {
    name: "midnight",
    background: Color::new(30, 30, 46),
    text: Color::new(205, 214, 244),
    accent: Color::new(137, 180, 250),
    muted: Color::new(108, 112, 134),
};

/// The palette used when no theme, or an unknown theme, is requested.
pub const DEFAULT_THEME: &Theme = &ROBOTRON;

/// All built-in palettes.
pub fn themes() -> &'static [&'static Theme] {
    &[&ROBOTRON, &PAPERWHITE, &AMBER, &MIDNIGHT]
}

/// Look up a palette by name.
pub fn lookup(name: &str) -> Option<&'static Theme> {
    themes().iter().copied().find(|t| t.name == name)
}

/// Look up a palette by name, falling back to [`DEFAULT_THEME`].
///
/// An unknown name is never an error; it logs a warning and boots with the
/// default palette.
pub fn theme_or_default(name: &str) -> &'static Theme {
    match lookup(name) {
        Some(theme) => theme,
        None => {
            warn!(requested = name, fallback = DEFAULT_THEME.name, "unknown theme, using default");
            DEFAULT_THEME
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

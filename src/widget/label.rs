//! Label: a leaf widget holding one line of text.

use crate::theme::{Color, Theme};

/// Which theme role a label draws its text with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// Primary text color.
    #[default]
    Normal,
    /// Cursor and scroll glyphs.
    Accent,
    /// De-emphasized text.
    Muted,
}

/// A single line of text, optionally drawn with swapped foreground and
/// background. The text is painted at the label's area origin; anything past
/// the clip rectangle is cropped by the redraw pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    inverted: bool,
    tone: Tone,
}

impl Label {
    /// Create a label with normal tone and no inversion.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), inverted: false, tone: Tone::Normal }
    }

    /// Create a label with the given tone.
    pub fn with_tone(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), inverted: false, tone }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether foreground and background are swapped.
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Swap (or restore) foreground and background.
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// The label's tone.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Change the label's tone.
    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    /// Resolve the (foreground, background) pair for painting.
    pub fn colors(&self, theme: &Theme) -> (Color, Color) {
        let base = match self.tone {
            Tone::Normal => theme.text,
            Tone::Accent => theme.accent,
            Tone::Muted => theme.muted,
        };
        if self.inverted {
            (theme.background, base)
        } else {
            (base, theme.background)
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ROBOTRON;

    #[test]
    fn new_label_defaults() {
        let l = Label::new("hello");
        assert_eq!(l.text(), "hello");
        assert!(!l.inverted());
        assert_eq!(l.tone(), Tone::Normal);
    }

    #[test]
    fn set_text_replaces() {
        let mut l = Label::new("a");
        l.set_text("b");
        assert_eq!(l.text(), "b");
    }

    #[test]
    fn normal_colors_are_text_on_background() {
        let l = Label::new("x");
        assert_eq!(l.colors(&ROBOTRON), (ROBOTRON.text, ROBOTRON.background));
    }

    #[test]
    fn inverted_swaps_colors() {
        let mut l = Label::new("x");
        l.set_inverted(true);
        assert_eq!(l.colors(&ROBOTRON), (ROBOTRON.background, ROBOTRON.text));
    }

    #[test]
    fn tone_picks_theme_role() {
        let accent = Label::with_tone("*", Tone::Accent);
        assert_eq!(accent.colors(&ROBOTRON).0, ROBOTRON.accent);

        let muted = Label::with_tone("-", Tone::Muted);
        assert_eq!(muted.colors(&ROBOTRON).0, ROBOTRON.muted);
    }

    #[test]
    fn inverted_tone_moves_role_to_background() {
        let mut accent = Label::with_tone("*", Tone::Accent);
        accent.set_inverted(true);
        assert_eq!(accent.colors(&ROBOTRON), (ROBOTRON.background, ROBOTRON.accent));
    }
}

//! SGR badge colors for level labels and tagged payload fields.
//!
//! Everything here is a bright-white-on-background pair, so a colored badge stays
//! legible regardless of the terminal's own foreground color.

use crate::level::Level;
use std::fmt;
use std::sync::LazyLock;

/// One SGR parameter string such as `42;97` (green background, bright white text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const RED: Self = Self("41;97");
    pub const GREEN: Self = Self("42;97");
    pub const YELLOW: Self = Self("43;97");
    pub const BLUE: Self = Self("44;97");
    pub const PURPLE: Self = Self("45;97");

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Raw SGR parameters, without the escape prefix.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.0
    }

    /// The full `\x1b[..m` escape that switches this color on.
    #[must_use]
    pub fn ansi(self) -> String {
        format!("\x1b[{}m", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("{color}{text}{}", Color::RESET)
}

/// Process-wide color table, immutable after first use.
#[derive(Debug)]
pub struct Palette {
    levels: [Color; 7],
}

static PALETTE: LazyLock<Palette> = LazyLock::new(|| Palette {
    levels: [
        Color::PURPLE, // debug
        Color::GREEN,  // info
        Color::YELLOW, // notice
        Color::YELLOW, // warn
        Color::RED,    // error
        Color::RED,    // critical
        Color::RED,    // fatal
    ],
});

impl Palette {
    #[must_use]
    pub fn get() -> &'static Self {
        &PALETTE
    }

    /// Badge color for a level label.
    #[must_use]
    pub const fn level(&self, level: Level) -> Color {
        self.levels[level as usize]
    }
}

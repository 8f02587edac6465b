//! ANSI styling tokens and helpers
//!
//! SGR (`ESC [ <n> m`) codes for text attributes and the 16 standard
//! foreground/background colors, plus small helpers that wrap text in
//! an activation prefix and a reset suffix.
//!
//! Escape sequences are written as-is. Whether the output sink
//! understands them is the caller's business.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";
/// Bold / increased intensity
pub const BOLD: &str = "\x1b[1m";
/// Dim / decreased intensity
pub const DIM: &str = "\x1b[2m";
/// Italic
pub const ITALIC: &str = "\x1b[3m";
/// Underline
pub const UNDERLINE: &str = "\x1b[4m";

/// Named ANSI color indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Color {
    /// All colors in palette order
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Whether this is one of the high-intensity variants
    pub fn is_bright(self) -> bool {
        (self as u8) >= 8
    }

    /// SGR foreground parameter: 30-37, or 90-97 for bright colors
    pub fn fg_code(self) -> u8 {
        let index = self as u8;
        if self.is_bright() {
            90 + (index - 8)
        } else {
            30 + index
        }
    }

    /// SGR background parameter: 40-47, or 100-107 for bright colors
    pub fn bg_code(self) -> u8 {
        let index = self as u8;
        if self.is_bright() {
            100 + (index - 8)
        } else {
            40 + index
        }
    }

    /// Config/CLI name, e.g. `bright_cyan`
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright_black",
            Color::BrightRed => "bright_red",
            Color::BrightGreen => "bright_green",
            Color::BrightYellow => "bright_yellow",
            Color::BrightBlue => "bright_blue",
            Color::BrightMagenta => "bright_magenta",
            Color::BrightCyan => "bright_cyan",
            Color::BrightWhite => "bright_white",
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    /// Accepts `bright_red`, `bright-red`, `Bright Red` and friends
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Color::ALL
            .into_iter()
            .find(|color| color.name() == normalized)
            .ok_or_else(|| CoreError::UnknownColor(s.to_string()))
    }
}

/// A single Select Graphic Rendition code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Fg(Color),
    Bg(Color),
}

impl Sgr {
    /// Numeric SGR parameter
    pub fn code(self) -> u8 {
        match self {
            Sgr::Reset => 0,
            Sgr::Bold => 1,
            Sgr::Dim => 2,
            Sgr::Italic => 3,
            Sgr::Underline => 4,
            Sgr::Fg(color) => color.fg_code(),
            Sgr::Bg(color) => color.bg_code(),
        }
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}

/// Ordered set of style codes applied uniformly to a piece of output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSpec {
    codes: Vec<Sgr>,
}

impl StyleSpec {
    /// Empty style (output is only followed by a reset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Banner style: bold first when requested, then the foreground color
    pub fn banner(color: Option<Color>, bold: bool) -> Self {
        let mut spec = Self::new();
        if bold {
            spec.codes.push(Sgr::Bold);
        }
        if let Some(color) = color {
            spec.codes.push(Sgr::Fg(color));
        }
        spec
    }

    /// Append a code; codes are emitted in insertion order
    pub fn with(mut self, code: Sgr) -> Self {
        self.codes.push(code);
        self
    }

    pub fn codes(&self) -> &[Sgr] {
        &self.codes
    }

    pub fn is_plain(&self) -> bool {
        self.codes.is_empty()
    }

    /// Concatenated activation sequences
    pub fn prefix(&self) -> String {
        self.codes.iter().map(ToString::to_string).collect()
    }

    /// `prefix + text + reset`
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix(), text, RESET)
    }
}

pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

pub fn dim(text: &str) -> String {
    format!("{DIM}{text}{RESET}")
}

pub fn italic(text: &str) -> String {
    format!("{ITALIC}{text}{RESET}")
}

pub fn underline(text: &str) -> String {
    format!("{UNDERLINE}{text}{RESET}")
}

/// Foreground color
pub fn fg(text: &str, color: Color) -> String {
    format!("{}{}{}", Sgr::Fg(color), text, RESET)
}

/// Background color
pub fn bg(text: &str, color: Color) -> String {
    format!("{}{}{}", Sgr::Bg(color), text, RESET)
}

/// Apply an arbitrary style spec
pub fn paint(text: &str, style: &StyleSpec) -> String {
    style.wrap(text)
}

/// Single-line "large" text: uppercased and styled.
///
/// Used by the banner renderer when the input cannot be drawn with glyphs.
pub fn large(text: &str, style: &StyleSpec) -> String {
    style.wrap(&text.to_uppercase())
}

/// Remove CSI escape sequences (`ESC [` ... final byte 0x40-0x7E).
///
/// Returns the input unchanged when it contains no ESC byte.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_codes_are_exact() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(BOLD, "\x1b[1m");
        assert_eq!(DIM, "\x1b[2m");
        assert_eq!(ITALIC, "\x1b[3m");
        assert_eq!(UNDERLINE, "\x1b[4m");
        assert_eq!(Sgr::Reset.to_string(), RESET);
        assert_eq!(Sgr::Underline.to_string(), UNDERLINE);
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::White.fg_code(), 37);
        assert_eq!(Color::BrightBlack.fg_code(), 90);
        assert_eq!(Color::BrightWhite.fg_code(), 97);
        assert_eq!(Color::Black.bg_code(), 40);
        assert_eq!(Color::White.bg_code(), 47);
        assert_eq!(Color::BrightRed.bg_code(), 101);
        assert_eq!(Sgr::Fg(Color::Green).to_string(), "\x1b[32m");
        assert_eq!(Sgr::Bg(Color::Blue).to_string(), "\x1b[44m");
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("Bright-Red".parse::<Color>().unwrap(), Color::BrightRed);
        assert_eq!("bright cyan".parse::<Color>().unwrap(), Color::BrightCyan);
        assert!(matches!(
            "mauve".parse::<Color>(),
            Err(CoreError::UnknownColor(name)) if name == "mauve"
        ));
    }

    #[test]
    fn test_color_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_banner_style_order() {
        let spec = StyleSpec::banner(Some(Color::Green), true);
        assert_eq!(spec.codes(), &[Sgr::Bold, Sgr::Fg(Color::Green)]);
        assert_eq!(spec.prefix(), "\x1b[1m\x1b[32m");

        let plain = StyleSpec::banner(None, false);
        assert!(plain.is_plain());
        assert_eq!(plain.wrap("x"), "x\x1b[0m");
    }

    #[test]
    fn test_helpers() {
        assert_eq!(bold("hi"), "\x1b[1mhi\x1b[0m");
        assert_eq!(italic("hi"), "\x1b[3mhi\x1b[0m");
        assert_eq!(underline("hi"), "\x1b[4mhi\x1b[0m");
        assert_eq!(dim("hi"), "\x1b[2mhi\x1b[0m");
        assert_eq!(fg("hi", Color::Red), "\x1b[31mhi\x1b[0m");
        assert_eq!(bg("hi", Color::Yellow), "\x1b[43mhi\x1b[0m");
    }

    #[test]
    fn test_large_uppercases() {
        let spec = StyleSpec::new().with(Sgr::Fg(Color::Cyan));
        assert_eq!(large("hi?", &spec), "\x1b[36mHI?\x1b[0m");
    }

    #[test]
    fn test_strip_ansi() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
        assert_eq!(strip_ansi("\x1b[1m\x1b[32mOK\x1b[0m"), "OK");
        assert_eq!(strip_ansi(&bg("█ x", Color::Red)), "█ x");
    }
}

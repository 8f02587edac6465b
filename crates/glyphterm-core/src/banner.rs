//! # Banner Renderer
//!
//! Turns a line of text into five rows of big letters by concatenating,
//! row by row, the glyph of every character.
//!
//! Input is uppercased first. If any character has no glyph the whole
//! request degrades to a single styled line of uppercase text preceded
//! by a bold notice; nothing is partially rendered. A stricter caller
//! can select [`UnsupportedPolicy::Strict`] to get an error instead.

use crate::ansi::{self, Color, StyleSpec};
use crate::glyphs::{GlyphTable, GLYPH_HEIGHT};
use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Printed (in bold) above the fallback line
pub const FALLBACK_NOTICE: &str =
    "Some characters have no banner glyph, showing large text instead";

/// What to do when the input has characters outside the glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Print a notice and fall back to single-line large text
    #[default]
    Degrade,
    /// Refuse with [`CoreError::UnsupportedCharacter`]
    Strict,
}

/// Outcome of checking normalized input against a glyph table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every character has a glyph
    Supported(String),
    /// `ch` (at char index `position` of `text`) is the first character
    /// without a glyph
    Unsupported {
        text: String,
        ch: char,
        position: usize,
    },
}

/// Uppercase `text` and check every character against `table`
pub fn validate(table: &GlyphTable, text: &str) -> Validation {
    let normalized = text.to_uppercase();
    let missing = normalized
        .chars()
        .enumerate()
        .find(|&(_, ch)| !table.supports(ch));

    match missing {
        Some((position, ch)) => Validation::Unsupported {
            text: normalized,
            ch,
            position,
        },
        None => Validation::Supported(normalized),
    }
}

/// Result of a render call, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Five styled rows, top to bottom
    Banner { lines: [String; GLYPH_HEIGHT] },
    /// Bold notice followed by the styled uppercase text
    Fallback { notice: String, line: String },
}

impl Rendering {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendering::Fallback { .. })
    }

    /// Output lines including style codes
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Rendering::Banner { lines } => lines.iter().map(String::as_str).collect(),
            Rendering::Fallback { notice, line } => vec![notice.as_str(), line.as_str()],
        }
    }

    /// Output lines with style codes removed
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|line| ansi::strip_ansi(line).into_owned())
            .collect()
    }

    /// Widest line in terminal columns, ignoring style codes
    pub fn width(&self) -> usize {
        self.plain_lines()
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
    }

    /// Write every line, then flush.
    ///
    /// A banner is followed by one blank line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        if !self.is_fallback() {
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders text with a borrowed glyph table
#[derive(Debug, Clone, Copy)]
pub struct BannerRenderer<'a> {
    table: &'a GlyphTable,
    policy: UnsupportedPolicy,
}

impl<'a> BannerRenderer<'a> {
    pub fn new(table: &'a GlyphTable) -> Self {
        Self {
            table,
            policy: UnsupportedPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnsupportedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &'a GlyphTable {
        self.table
    }

    pub fn policy(&self) -> UnsupportedPolicy {
        self.policy
    }

    /// Render without writing anything.
    ///
    /// # Errors
    ///
    /// Only under [`UnsupportedPolicy::Strict`], when `text` has a
    /// character outside the table.
    pub fn render(&self, text: &str, style: &StyleSpec) -> Result<Rendering> {
        match validate(self.table, text) {
            Validation::Supported(text) => {
                tracing::debug!(text = %text, font = self.table.name(), "Rendering banner");
                Ok(self.compose(&text, style))
            }
            Validation::Unsupported { text, ch, position } => match self.policy {
                UnsupportedPolicy::Degrade => {
                    tracing::warn!(?ch, position, "No glyph for character, using large text");
                    Ok(Rendering::Fallback {
                        notice: ansi::bold(FALLBACK_NOTICE),
                        line: ansi::large(&text, style),
                    })
                }
                UnsupportedPolicy::Strict => Err(CoreError::UnsupportedCharacter { ch, position }),
            },
        }
    }

    fn compose(&self, text: &str, style: &StyleSpec) -> Rendering {
        let prefix = style.prefix();
        let glyphs: Vec<_> = text.chars().filter_map(|ch| self.table.lookup(ch)).collect();

        let lines = std::array::from_fn(|row| {
            let mut line = prefix.clone();
            for glyph in &glyphs {
                line.push_str(glyph.row(row));
            }
            line.push_str(ansi::RESET);
            line
        });

        Rendering::Banner { lines }
    }

    /// Render and write to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, text: &str, style: &StyleSpec) -> Result<()> {
        let rendering = self.render(text, style)?;
        rendering.write_to(out)?;
        Ok(())
    }

    /// Render and print to stdout.
    ///
    /// stdout stays locked for the whole banner so output from other
    /// threads cannot land between its rows.
    pub fn print(&self, text: &str, style: &StyleSpec) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_to(&mut out, text, style)
    }
}

/// Print `text` as a banner with an optional color and bold weight
pub fn print_huge(table: &GlyphTable, text: &str, color: Option<Color>, bold: bool) -> Result<()> {
    BannerRenderer::new(table).print(text, &StyleSpec::banner(color, bold))
}

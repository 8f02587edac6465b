//! Glyph tables for banner rendering
//!
//! A glyph is the big-letter form of one character: exactly
//! [`GLYPH_HEIGHT`] rows of equal display width. Each glyph carries its
//! own trailing spacing, so glyphs are concatenated with no separator.
//!
//! ```text
//!  ███  █   █
//! █   █ █  █
//! █   █ ███
//! █   █ █  █
//!  ███  █   █
//! ```

use crate::{CoreError, Result};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Number of rows in every glyph
pub const GLYPH_HEIGHT: usize = 5;

/// Raw glyph rows, top to bottom
pub type GlyphRows = [&'static str; GLYPH_HEIGHT];

/// Big-letter rendering of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: GlyphRows,
    width: usize,
}

impl Glyph {
    /// Build a glyph, checking that every row has the same display width
    /// and contains no control characters.
    pub fn new(ch: char, rows: GlyphRows) -> Result<Self> {
        let width = rows[0].width();
        for (i, row) in rows.iter().enumerate() {
            if row.chars().any(char::is_control) {
                return Err(CoreError::InvalidGlyph {
                    ch,
                    reason: format!("row {i} contains a control character"),
                });
            }
            if row.width() != width {
                return Err(CoreError::InvalidGlyph {
                    ch,
                    reason: format!("row {i} is {} columns wide, expected {width}", row.width()),
                });
            }
        }
        Ok(Self { rows, width })
    }

    pub fn rows(&self) -> &GlyphRows {
        &self.rows
    }

    /// Row `index` (0 = top). Panics if `index >= GLYPH_HEIGHT`.
    pub fn row(&self, index: usize) -> &'static str {
        self.rows[index]
    }

    /// Display width in terminal columns, trailing spacing included
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Closed mapping from supported characters to glyphs.
///
/// Built once and handed to renderers by reference. Keys are uppercase;
/// callers normalize before calling [`GlyphTable::lookup`].
#[derive(Debug, Clone)]
pub struct GlyphTable {
    name: &'static str,
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphTable {
    /// The built-in table: `A`-`Z`, `0`-`9`, space and `!`
    pub fn standard() -> Self {
        let glyphs = STANDARD_GLYPHS
            .iter()
            .map(|&(ch, rows)| {
                let width = rows[0].width();
                (ch, Glyph { rows, width })
            })
            .collect();

        Self {
            name: "Standard",
            glyphs,
        }
    }

    /// Build a table from `(char, rows)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGlyph`] for a duplicate character or a
    /// malformed glyph.
    pub fn from_entries<I>(name: &'static str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, GlyphRows)>,
    {
        let mut glyphs = BTreeMap::new();
        for (ch, rows) in entries {
            let glyph = Glyph::new(ch, rows)?;
            if glyphs.insert(ch, glyph).is_some() {
                return Err(CoreError::InvalidGlyph {
                    ch,
                    reason: "defined more than once".to_string(),
                });
            }
        }
        Ok(Self { name, glyphs })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn lookup(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn supports(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Supported characters in ascending order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[rustfmt::skip]
const STANDARD_GLYPHS: &[(char, GlyphRows)] = &[
    ('A', [" ███  ", "█   █ ", "█████ ", "█   █ ", "█   █ "]),
    ('B', ["████  ", "█   █ ", "████  ", "█   █ ", "████  "]),
    ('C', [" ████ ", "█     ", "█     ", "█     ", " ████ "]),
    ('D', ["████  ", "█   █ ", "█   █ ", "█   █ ", "████  "]),
    ('E', ["█████ ", "█     ", "████  ", "█     ", "█████ "]),
    ('F', ["█████ ", "█     ", "████  ", "█     ", "█     "]),
    ('G', [" ████ ", "█     ", "█  ██ ", "█   █ ", " ████ "]),
    ('H', ["█   █ ", "█   █ ", "█████ ", "█   █ ", "█   █ "]),
    ('I', ["███ ", " █  ", " █  ", " █  ", "███ "]),
    ('J', ["  ███ ", "    █ ", "    █ ", "█   █ ", " ███  "]),
    ('K', ["█   █ ", "█  █  ", "███   ", "█  █  ", "█   █ "]),
    ('L', ["█     ", "█     ", "█     ", "█     ", "█████ "]),
    ('M', ["█   █ ", "██ ██ ", "█ █ █ ", "█   █ ", "█   █ "]),
    ('N', ["█   █ ", "██  █ ", "█ █ █ ", "█  ██ ", "█   █ "]),
    ('O', [" ███  ", "█   █ ", "█   █ ", "█   █ ", " ███  "]),
    ('P', ["████  ", "█   █ ", "████  ", "█     ", "█     "]),
    ('Q', [" ███  ", "█   █ ", "█ █ █ ", "█  █  ", " ██ █ "]),
    ('R', ["████  ", "█   █ ", "████  ", "█  █  ", "█   █ "]),
    ('S', [" ████ ", "█     ", " ███  ", "    █ ", "████  "]),
    ('T', ["█████ ", "  █   ", "  █   ", "  █   ", "  █   "]),
    ('U', ["█   █ ", "█   █ ", "█   █ ", "█   █ ", " ███  "]),
    ('V', ["█   █ ", "█   █ ", "█   █ ", " █ █  ", "  █   "]),
    ('W', ["█   █ ", "█   █ ", "█ █ █ ", "██ ██ ", "█   █ "]),
    ('X', ["█   █ ", " █ █  ", "  █   ", " █ █  ", "█   █ "]),
    ('Y', ["█   █ ", " █ █  ", "  █   ", "  █   ", "  █   "]),
    ('Z', ["█████ ", "   █  ", "  █   ", " █    ", "█████ "]),
    ('0', [" ███  ", "█  ██ ", "█ █ █ ", "██  █ ", " ███  "]),
    ('1', ["  █   ", " ██   ", "  █   ", "  █   ", " ███  "]),
    ('2', [" ███  ", "█   █ ", "   █  ", "  █   ", "█████ "]),
    ('3', ["████  ", "    █ ", " ███  ", "    █ ", "████  "]),
    ('4', ["█   █ ", "█   █ ", "█████ ", "    █ ", "    █ "]),
    ('5', ["█████ ", "█     ", "████  ", "    █ ", "████  "]),
    ('6', [" ███  ", "█     ", "████  ", "█   █ ", " ███  "]),
    ('7', ["█████ ", "    █ ", "   █  ", "  █   ", "  █   "]),
    ('8', [" ███  ", "█   █ ", " ███  ", "█   █ ", " ███  "]),
    ('9', [" ███  ", "█   █ ", " ████ ", "    █ ", " ███  "]),
    ('!', ["█ ", "█ ", "█ ", "  ", "█ "]),
    (' ', ["    ", "    ", "    ", "    ", "    "]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_well_formed() {
        let validated = GlyphTable::from_entries("Standard", STANDARD_GLYPHS.iter().copied());
        assert!(validated.is_ok());

        let table = GlyphTable::standard();
        assert_eq!(table.len(), validated.unwrap().len());
    }

    #[test]
    fn test_standard_table_coverage() {
        let table = GlyphTable::standard();
        for ch in ('A'..='Z').chain('0'..='9').chain([' ', '!']) {
            assert!(table.supports(ch), "missing glyph for {ch:?}");
        }
        assert_eq!(table.len(), 38);
        assert!(!table.supports('a'));
        assert!(!table.supports('?'));
        assert!(!table.supports('.'));
    }

    #[test]
    fn test_glyphs_carry_trailing_space() {
        let table = GlyphTable::standard();
        for ch in table.chars() {
            let glyph = table.lookup(ch).unwrap();
            assert!(glyph.rows().iter().all(|row| row.ends_with(' ')), "{ch:?}");
        }
    }

    #[test]
    fn test_glyph_widths() {
        let table = GlyphTable::standard();
        assert_eq!(table.lookup('O').unwrap().width(), 6);
        assert_eq!(table.lookup('I').unwrap().width(), 4);
        assert_eq!(table.lookup('!').unwrap().width(), 2);
        assert_eq!(table.lookup(' ').unwrap().width(), 4);
    }

    #[test]
    fn test_chars_sorted() {
        let table = GlyphTable::standard();
        let chars: Vec<char> = table.chars().collect();
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(chars, sorted);
        assert_eq!(chars.first(), Some(&' '));
    }

    #[test]
    fn test_ragged_glyph_rejected() {
        let err = Glyph::new('X', ["ab", "ab", "abc", "ab", "ab"]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGlyph { ch: 'X', .. }));
    }

    #[test]
    fn test_control_character_rejected() {
        let err = Glyph::new('X', ["a\t", "ab", "ab", "ab", "ab"]).unwrap_err();
        assert!(err.to_string().contains("control character"));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let rows = ["#", "#", "#", "#", "#"];
        let result = GlyphTable::from_entries("dup", [('A', rows), ('A', rows)]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidGlyph { ch: 'A', reason }) if reason.contains("more than once")
        ));
    }

    #[test]
    fn test_custom_table() {
        let table = GlyphTable::from_entries("Tiny", [('A', ["/\\", "--", "||", "  ", "  "])]).unwrap();
        assert_eq!(table.name(), "Tiny");
        assert_eq!(table.lookup('A').unwrap().row(1), "--");
        assert!(table.lookup('B').is_none());
    }
}

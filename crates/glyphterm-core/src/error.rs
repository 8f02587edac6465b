//! Error types for glyphterm core

use thiserror::Error;

/// Result type for glyphterm core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Banner input contains a character with no glyph (strict policy only)
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },

    /// A glyph definition is malformed
    #[error("invalid glyph for {ch:?}: {reason}")]
    InvalidGlyph { ch: char, reason: String },

    /// Color name could not be parsed
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Console font API call failed
    #[error("console font error: {0}")]
    ConsoleFont(String),

    /// Operation is not available on this platform
    #[error("not supported on this platform: {0}")]
    PlatformUnsupported(&'static str),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

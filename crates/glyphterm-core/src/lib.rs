//! # glyphterm core
//!
//! Terminal text styling for glyphterm.
//!
//! This crate provides:
//! - ANSI style tokens and one-line styling helpers
//! - The glyph table for big-letter banners
//! - The banner renderer (`print_huge`) with its large-text fallback
//! - Console font control on Windows
//!
//! ```text
//! █   █ ███ █
//! █   █  █  █
//! █████  █  █
//! █   █  █
//! █   █ ███ █
//! ```

pub mod ansi;
pub mod banner;
pub mod console_font;
pub mod error;
pub mod glyphs;

pub use ansi::{Color, Sgr, StyleSpec};
pub use banner::{print_huge, validate, BannerRenderer, Rendering, UnsupportedPolicy, Validation};
pub use console_font::FontInfo;
pub use error::{CoreError, Result};
pub use glyphs::{Glyph, GlyphTable, GLYPH_HEIGHT};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

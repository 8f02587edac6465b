//! glyphterm - terminal text styling and big-letter banners
//!
//! ```text
//! █   █ ███ █
//! █   █  █  █
//! █████  █  █
//! █   █  █
//! █   █ ███ █
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use glyphterm_config::{Config, ConfigManager};
use glyphterm_core::ansi::{self, Color, Sgr, StyleSpec};
use glyphterm_core::{console_font, BannerRenderer, GlyphTable, UnsupportedPolicy};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// glyphterm - ANSI text styling and banner renderer
#[derive(Parser, Debug)]
#[command(name = "glyphterm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print text in big letters
    Banner {
        text: String,
        /// Foreground color (e.g. green, bright-cyan)
        #[arg(long)]
        color: Option<Color>,
        /// Bold rows
        #[arg(long)]
        bold: bool,
        /// Fail instead of falling back on unsupported characters
        #[arg(long)]
        strict: bool,
    },
    /// Print one line of styled text
    Style {
        text: String,
        #[arg(long)]
        bold: bool,
        #[arg(long)]
        dim: bool,
        #[arg(long)]
        italic: bool,
        #[arg(long)]
        underline: bool,
        /// Foreground color
        #[arg(long)]
        color: Option<Color>,
        /// Background color
        #[arg(long)]
        bg: Option<Color>,
    },
    /// Show every character the banner font supports
    Glyphs,
    /// Show every foreground and background color
    Colors,
    /// Console font control (Windows)
    Font {
        #[command(subcommand)]
        action: FontAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum FontAction {
    /// Show current font settings
    Show,
    /// Change the font height
    Size { height: i16 },
    /// Switch to bold weight
    Bold,
    /// Switch to normal weight
    Normal,
    /// Change the font face
    Name { name: String },
    /// Apply the [console_font] section of the config
    Apply,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!("glyphterm={log_level},glyphterm_core={log_level},glyphterm_config={log_level}")
            }),
        ))
        .init();

    tracing::debug!("Starting glyphterm v{}", env!("CARGO_PKG_VERSION"));

    let manager = match &args.config {
        Some(path) => ConfigManager::from_path(path),
        None => ConfigManager::new(),
    }?;
    let config = manager.config();
    tracing::debug!(path = %manager.path().display(), "Configuration loaded");

    // Built once, borrowed by every renderer below
    let table = GlyphTable::standard();

    match args.command {
        Command::Banner {
            text,
            color,
            bold,
            strict,
        } => {
            let (style, policy) = banner_settings(&config, color, bold, strict);
            BannerRenderer::new(&table)
                .with_policy(policy)
                .print(&text, &style)?;
        }
        Command::Style {
            text,
            bold,
            dim,
            italic,
            underline,
            color,
            bg,
        } => {
            let mut style = StyleSpec::new();
            let flags = [
                (bold, Sgr::Bold),
                (dim, Sgr::Dim),
                (italic, Sgr::Italic),
                (underline, Sgr::Underline),
            ];
            for (enabled, code) in flags {
                if enabled {
                    style = style.with(code);
                }
            }
            if let Some(color) = color {
                style = style.with(Sgr::Fg(color));
            }
            if let Some(color) = bg {
                style = style.with(Sgr::Bg(color));
            }
            println!("{}", ansi::paint(&text, &style));
        }
        Command::Glyphs => {
            let renderer = BannerRenderer::new(&table);
            let style = config.banner.style();
            println!("{} ({} glyphs)", ansi::bold(table.name()), table.len());
            for ch in table.chars() {
                println!("{}", ansi::dim(&format!("{ch:?}")));
                renderer.print(&ch.to_string(), &style)?;
            }
        }
        Command::Colors => {
            for color in Color::ALL {
                println!(
                    "{:<16}{}  {}",
                    color.name(),
                    ansi::fg("foreground", color),
                    ansi::bg(" background ", color)
                );
            }
        }
        Command::Font { action } => run_font(action, &config)?,
    }

    Ok(())
}

/// Merge CLI banner flags over the `[banner]` config section
fn banner_settings(
    config: &Config,
    color: Option<Color>,
    bold: bool,
    strict: bool,
) -> (StyleSpec, UnsupportedPolicy) {
    let color = color.or(config.banner.color);
    let bold = bold || config.banner.bold;
    let policy = if strict {
        UnsupportedPolicy::Strict
    } else {
        config.banner.unsupported
    };
    (StyleSpec::banner(color, bold), policy)
}

fn run_font(action: FontAction, config: &Config) -> anyhow::Result<()> {
    match action {
        FontAction::Show => println!("{}", console_font::show_font()?),
        FontAction::Size { height } => console_font::set_font_size(height)?,
        FontAction::Bold => console_font::set_bold()?,
        FontAction::Normal => console_font::set_normal()?,
        FontAction::Name { name } => console_font::set_font_name(&name)?,
        FontAction::Apply => {
            let font = &config.console_font;
            if font.is_empty() {
                tracing::warn!("No [console_font] settings to apply");
                return Ok(());
            }
            if let Some(name) = &font.face_name {
                console_font::set_font_name(name).context("setting font face")?;
            }
            if let Some(size) = font.size {
                console_font::set_font_size(size).context("setting font size")?;
            }
            match font.bold {
                Some(true) => console_font::set_bold()?,
                Some(false) => console_font::set_normal()?,
                None => {}
            }
        }
    }
    Ok(())
}

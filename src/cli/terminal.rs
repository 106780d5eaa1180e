//! Terminal capability detection and colouring

use flexver::Component;
use owo_colors::{OwoColorize, colors::css};

/// When to colour output
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout supports it
    #[default]
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the capabilities of stdout
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Colours output, or passes it through unchanged when colour is disabled
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour a component by its kind
    #[must_use]
    pub fn component(self, component: &Component) -> String {
        let text = component.to_string();
        if !self.enabled {
            return text;
        }
        match component {
            Component::Numeric(_) => text.bright_cyan().to_string(),
            Component::PreRelease(_) => text.bright_red().to_string(),
            Component::Textual(_) => text.bright_magenta().to_string(),
            Component::Null => text,
        }
    }

    /// Colour as success (green)
    #[must_use]
    pub fn success(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colour as failure (red)
    #[must_use]
    pub fn failure(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Red>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    #[must_use]
    pub fn dim(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

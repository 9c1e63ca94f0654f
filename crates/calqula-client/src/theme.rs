//! Color theme state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Active color mode of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light color scheme.
    Light,
    /// Dark color scheme.
    Dark,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Source of the current color mode.
///
/// Implemented by the host application's theme state. [`FixedTheme`]
/// serves tests and embedders without live theme state.
pub trait ThemeProvider: Send {
    /// The color mode at the time of the call.
    fn color_mode(&self) -> ThemeMode;
}

/// A provider that always reports the same mode.
#[derive(Debug, Clone, Copy)]
pub struct FixedTheme(pub ThemeMode);

impl ThemeProvider for FixedTheme {
    fn color_mode(&self) -> ThemeMode {
        self.0
    }
}

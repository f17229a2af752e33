use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Hero illustration drawn for this theme's background.
    pub fn illustration(&self) -> &'static str {
        match self {
            Theme::Dark => "/com_dm.svg",
            Theme::Light => "/com_lm.svg",
        }
    }

    /// Wordmark shown in the navigation bar.
    pub fn logo(&self) -> &'static str {
        match self {
            Theme::Dark => "/logo_dm.svg",
            Theme::Light => "/logo_lm.svg",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

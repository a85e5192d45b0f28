//! Light/dark theme preference.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host; treated as light when a concrete choice is needed.
    #[default]
    System,
}

impl ThemeMode {
    /// The concrete mode a renderer should use.
    pub fn resolved(&self) -> ThemeMode {
        match self {
            ThemeMode::System => ThemeMode::Light,
            other => *other,
        }
    }

    pub fn toggled(&self) -> ThemeMode {
        match self.resolved() {
            ThemeMode::Dark => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.resolved() == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::System => write!(f, "system"),
        }
    }
}

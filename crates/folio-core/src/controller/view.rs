//! Screens and the navigation edges between them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{PortfolioData, Theme};

/// The active screen. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Login,
    Landing,
    Editor,
    ThemeSelection,
    Preview,
    Profile,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Landing => "landing",
            Self::Editor => "editor",
            Self::ThemeSelection => "theme-selection",
            Self::Preview => "preview",
            Self::Profile => "profile",
        }
    }

    /// Whether a user action may move from `self` to `target`.
    ///
    /// Sign-out (any view to login) and opening a share link (straight to
    /// preview) bypass this table.
    #[must_use]
    pub const fn can_navigate_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Login, Self::Landing)
                | (Self::Landing, Self::Editor | Self::Profile)
                | (
                    Self::Editor,
                    Self::Landing | Self::ThemeSelection | Self::Profile
                )
                | (
                    Self::ThemeSelection,
                    Self::Editor | Self::Preview | Self::Profile
                )
                | (Self::Preview, Self::ThemeSelection)
                | (
                    Self::Profile,
                    Self::Editor | Self::ThemeSelection | Self::Preview
                )
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current screen, document and theme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub view: View,
    pub data: PortfolioData,
    pub theme: Theme,
}

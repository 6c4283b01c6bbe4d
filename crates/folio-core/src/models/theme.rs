//! Visual theme presets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual preset applied when rendering a portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Minimal,
    Modern,
    Glass,
    Bold,
    Classic,
    Vibrant,
}

impl Theme {
    pub const ALL: [Self; 6] = [
        Self::Minimal,
        Self::Modern,
        Self::Glass,
        Self::Bold,
        Self::Classic,
        Self::Vibrant,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Modern => "modern",
            Self::Glass => "glass",
            Self::Bold => "bold",
            Self::Classic => "classic",
            Self::Vibrant => "vibrant",
        }
    }

    /// Accent color used by exports and previews
    #[must_use]
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Minimal => "#111827",
            Self::Modern => "#4f46e5",
            Self::Glass => "#0ea5e9",
            Self::Bold => "#dc2626",
            Self::Classic => "#92400e",
            Self::Vibrant => "#db2777",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == normalized)
            .ok_or_else(|| format!("unknown theme: {s}"))
    }
}

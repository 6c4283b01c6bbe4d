//! Colors for the app chrome and for each portfolio theme preview

use folio_core::Theme;

/// Color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Editor and navigation screens
pub const APP_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    border: "#dadce0",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
};

const fn portfolio_palette(
    bg_primary: &'static str,
    bg_secondary: &'static str,
    text_primary: &'static str,
    text_secondary: &'static str,
    theme: Theme,
) -> ColorPalette {
    ColorPalette {
        bg_primary,
        bg_secondary,
        text_primary,
        text_secondary,
        border: bg_secondary,
        accent: theme.accent(),
        accent_text: "#ffffff",
        error: APP_PALETTE.error,
        success: APP_PALETTE.success,
    }
}

/// Palette the preview renders a portfolio with. Accents come from the
/// theme so preview and export agree.
pub const fn preview_palette(theme: Theme) -> ColorPalette {
    match theme {
        Theme::Minimal => portfolio_palette("#ffffff", "#f4f4f5", "#18181b", "#52525b", theme),
        Theme::Modern => portfolio_palette("#0f172a", "#1e293b", "#f8fafc", "#94a3b8", theme),
        Theme::Classic => portfolio_palette("#fdfbf7", "#f3efe6", "#292524", "#57534e", theme),
        Theme::Vibrant => portfolio_palette("#fff7ed", "#ffedd5", "#1c1917", "#44403c", theme),
        Theme::Glass => portfolio_palette("#e0f2fe", "#f0f9ff", "#0c4a6e", "#0369a1", theme),
        Theme::Bold => portfolio_palette("#000000", "#171717", "#fafafa", "#a3a3a3", theme),
    }
}

/// Whether the preview background is dark.
pub const fn is_dark(theme: Theme) -> bool {
    matches!(theme, Theme::Modern | Theme::Bold)
}

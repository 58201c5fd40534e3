// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use ideadeck_core::models::Tier;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE - Muted, sophisticated colors inspired by modern terminal UIs
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background - very subtle lift from black
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Selected card background - subtle highlight
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Active tab background - very subtle lift
pub const BG_TAB_ACTIVE: Color = Color::Rgb(28, 28, 32);

/// Status bar background - very dark, almost black
pub const BG_STATUSBAR: Color = Color::Rgb(12, 12, 12);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders, hidden ideas
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors - Muted, not harsh
// -----------------------------------------------------------------------------

/// Primary accent - muted blue (interactive elements, focus)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber/orange
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Special - muted purple (favorites, badges)
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Tier Colors - S/A/B/C grades, mirroring the score badge palette
// -----------------------------------------------------------------------------

pub const TIER_S: Color = Color::Rgb(206, 145, 60);
pub const TIER_A: Color = Color::Rgb(106, 153, 85);
pub const TIER_B: Color = Color::Rgb(86, 156, 214);
pub const TIER_C: Color = Color::Rgb(128, 128, 128);

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::S => TIER_S,
        Tier::A => TIER_A,
        Tier::B => TIER_B,
        Tier::C => TIER_C,
    }
}

// =============================================================================
// STYLE FUNCTIONS - Semantic styles for common UI patterns
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn status_success() -> Style {
    Style::default().fg(ACCENT_SUCCESS)
}

pub fn status_warning() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn card_bg() -> Style {
    Style::default().bg(BG_CARD)
}

pub fn card_bg_selected() -> Style {
    Style::default().bg(BG_SELECTED)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(BG_TAB_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn favorite_marker() -> Style {
    Style::default().fg(ACCENT_SPECIAL)
}

pub fn hidden_marker() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
}

//! Centralized theming for the mailreply TUI
//!
//! This module provides a single source of truth for all colors and styles
//! used throughout the application.

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::ai::Intent;
use crate::config::ThemeVariant;

/// Global theme variant storage
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

/// Get the current theme variant
pub fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

/// Color palette - colors that vary by theme
pub mod colors {
    use super::*;

    pub fn bg_selection() -> Color {
        Color::LightBlue
    }

    pub fn bg_status() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn bg_error() -> Color {
        Color::Red
    }

    pub fn bg_warning() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Yellow,
            ThemeVariant::HighContrast => Color::LightYellow,
        }
    }

    pub fn fg_primary() -> Color {
        Color::White
    }

    pub fn fg_secondary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Gray,
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn fg_muted() -> Color {
        Color::Gray
    }

    pub fn fg_accent() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Cyan,
            ThemeVariant::HighContrast => Color::LightCyan,
        }
    }

    pub fn fg_warning() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Yellow,
            ThemeVariant::HighContrast => Color::LightYellow,
        }
    }

    pub fn border() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn border_focused() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Cyan,
            ThemeVariant::HighContrast => Color::LightCyan,
        }
    }

    pub fn status_ok() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Green,
            ThemeVariant::HighContrast => Color::LightGreen,
        }
    }

    pub fn status_missing() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Red,
            ThemeVariant::HighContrast => Color::LightRed,
        }
    }

    pub fn bg_help() -> Color {
        bg_status()
    }

    /// Color-coding for detected intents; anything unrecognized is gray
    pub fn intent(intent: Option<Intent>) -> Color {
        match intent {
            Some(Intent::Inquiry) => Color::Blue,
            Some(Intent::Complaint) => Color::Red,
            Some(Intent::Offer) => Color::Green,
            Some(Intent::Information) => Color::Rgb(255, 165, 0),
            None => Color::Gray,
        }
    }
}

pub mod symbols {
    pub const KEY_OK: &str = "●";
    pub const KEY_MISSING: &str = "○";
    pub const TONE_SELECTED: &str = "◉";
    pub const TONE_UNSELECTED: &str = "○";
    pub const CURSOR: &str = "│";
    pub const MASK: char = '•';
}

/// Pre-composed styles for common UI elements
pub struct Theme;

impl Theme {
    // === Selection Styles ===

    pub fn selected() -> Style {
        Style::default()
            .bg(colors::bg_selection())
            .fg(colors::fg_primary())
    }

    // === Text Styles ===

    pub fn text() -> Style {
        Style::default().fg(colors::fg_primary())
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(colors::fg_secondary())
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors::fg_muted())
    }

    pub fn text_accent() -> Style {
        Style::default().fg(colors::fg_accent())
    }

    pub fn tone_label() -> Style {
        Self::text_secondary().add_modifier(Modifier::ITALIC)
    }

    pub fn intent_label(intent: Option<Intent>) -> Style {
        Style::default()
            .fg(colors::intent(intent))
            .add_modifier(Modifier::BOLD)
    }

    // === Status Bar ===

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_primary())
    }

    pub fn status_ok() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::status_ok())
    }

    pub fn status_missing() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::status_missing())
    }

    pub fn status_busy() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_warning())
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_bar() -> Style {
        Style::default()
            .bg(colors::bg_error())
            .fg(colors::fg_primary())
    }

    pub fn warning_bar() -> Style {
        Style::default().bg(colors::bg_warning()).fg(Color::Black)
    }

    // === Help Bar ===

    pub fn help_key() -> Style {
        Style::default()
            .bg(colors::bg_help())
            .fg(colors::fg_warning())
    }

    pub fn help_desc() -> Style {
        Style::default()
            .bg(colors::bg_help())
            .fg(colors::fg_muted())
    }

    // === Borders ===

    pub fn border() -> Style {
        Style::default().fg(colors::border())
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::border_focused())
    }

    pub fn border_error() -> Style {
        Style::default().fg(colors::bg_error())
    }

    pub fn toast() -> Style {
        Style::default()
            .fg(colors::status_ok())
            .add_modifier(Modifier::BOLD)
    }
}

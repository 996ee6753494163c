//! Centralized theme module for TUI color constants and styles

use clap::ValueEnum;
use ratatui::prelude::*;

use crate::scoring::Band;

/// Theme preference from the command line, resolved to a concrete palette at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Detect from the terminal background
    Auto,
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Gauge band colors (red/orange/yellow/green, matching the report bands)
    pub band_nascent: Color,
    pub band_developing: Color,
    pub band_maturing: Color,
    pub band_leading: Color,
    pub gauge_track: Color,

    // Form colors
    pub row_alt_bg: Color,
    pub category_style: Style,
    pub slider_filled: Color,
    pub slider_empty: Color,
    pub value_color: Color,

    // Styles
    pub header_style: Style,
    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            band_nascent: Color::Red,
            band_developing: Color::Rgb(255, 165, 0),
            band_maturing: Color::Yellow,
            band_leading: Color::Green,
            gauge_track: Color::Indexed(236),
            row_alt_bg: Color::Indexed(235),
            category_style: Style::new().fg(Color::Cyan).bold(),
            slider_filled: Color::Cyan,
            slider_empty: Color::DarkGray,
            value_color: Color::White,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
        }
    }

    pub fn light() -> Self {
        Self {
            band_nascent: Color::Red,
            band_developing: Color::Rgb(214, 120, 0),
            band_maturing: Color::Rgb(153, 134, 0),
            band_leading: Color::Rgb(0, 128, 0),
            gauge_track: Color::Indexed(252),
            row_alt_bg: Color::Indexed(254),
            category_style: Style::new().fg(Color::Blue).bold(),
            slider_filled: Color::Blue,
            slider_empty: Color::Indexed(250),
            value_color: Color::Black,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Red,
            popup_border: Color::Blue,
        }
    }

    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Nascent => self.band_nascent,
            Band::Developing => self.band_developing,
            Band::Maturing => self.band_maturing,
            Band::Leading => self.band_leading,
        }
    }

    /// Returns the band color for a 0-100 score
    pub fn score_color(&self, score: f64) -> Color {
        self.band_color(Band::for_score(score))
    }
}

/// Resolve a theme preference to a palette. Auto probes the terminal
/// background luma and falls back to dark when detection fails (pipes,
/// unsupported terminals).
pub fn resolve_theme(preference: Theme) -> ThemeColors {
    match preference {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}

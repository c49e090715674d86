//! Theme and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::models::ThemeChoice;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Brand Colors
    pub primary: Color,
    pub primary_dark: Color,
    pub accent: Color,

    // Semantic Colors
    pub success: Color,
    pub error: Color,

    // Background Colors
    pub bg: Color,
    pub bg_card: Color,
    pub bg_card_back: Color,
    pub bg_highlight: Color,

    // Text Colors
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
}

/// Theme struct that holds colors and provides style methods.
#[derive(Debug, Clone)]
pub struct Theme {
    pub choice: ThemeChoice,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(choice: ThemeChoice) -> Self {
        let colors = match choice {
            ThemeChoice::Light => Self::light_colors(),
            ThemeChoice::Dark => Self::dark_colors(),
        };
        Self { choice, colors }
    }

    fn light_colors() -> ThemeColors {
        ThemeColors {
            // Brand Colors
            primary: Color::Rgb(37, 99, 235),       // Blue 600
            primary_dark: Color::Rgb(29, 78, 216),  // Blue 700
            accent: Color::Rgb(0, 122, 255),        // System blue

            // Semantic Colors
            success: Color::Rgb(76, 175, 80),       // Green
            error: Color::Rgb(244, 67, 54),         // Red

            // Background Colors
            bg: Color::Rgb(248, 250, 252),          // Slate 50
            bg_card: Color::Rgb(255, 255, 255),     // White
            bg_card_back: Color::Rgb(239, 244, 255),// Pale blue
            bg_highlight: Color::Rgb(226, 232, 240),// Slate 200

            // Text Colors
            text: Color::Rgb(30, 41, 59),           // Slate 800
            text_muted: Color::Rgb(100, 116, 139),  // Slate 500
            text_dim: Color::Rgb(148, 163, 184),    // Slate 400
        }
    }

    fn dark_colors() -> ThemeColors {
        ThemeColors {
            // Brand Colors
            primary: Color::Rgb(74, 144, 226),      // Soft blue
            primary_dark: Color::Rgb(18, 40, 77),   // Deep navy
            accent: Color::Rgb(96, 165, 250),       // Blue 400

            // Semantic Colors
            success: Color::Rgb(76, 175, 80),       // Green
            error: Color::Rgb(244, 67, 54),         // Red

            // Background Colors
            bg: Color::Rgb(15, 23, 42),             // Slate 900
            bg_card: Color::Rgb(18, 40, 77),        // Deep navy
            bg_card_back: Color::Rgb(7, 19, 44),    // Darker navy
            bg_highlight: Color::Rgb(30, 41, 59),   // Slate 800

            // Text Colors
            text: Color::Rgb(226, 232, 240),        // Slate 200
            text_muted: Color::Rgb(148, 163, 184),  // Slate 400
            text_dim: Color::Rgb(100, 116, 139),    // Slate 500
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Styles
    // ══════════════════════════════════════════════════════════════════════

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.colors.bg_highlight)
            .fg(self.colors.text)
    }

    pub fn card_front(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .bg(self.colors.bg_card)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_back(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .bg(self.colors.bg_card_back)
            .add_modifier(Modifier::BOLD)
    }

    pub fn correct(&self) -> Style {
        Style::default()
            .fg(self.colors.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn wrong(&self) -> Style {
        Style::default()
            .fg(self.colors.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.colors.text_dim)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeChoice::Light)
    }
}

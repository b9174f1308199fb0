//! Color theme and glyphs for the Gamefolio TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, BorderType},
};

use gamefolio_engine::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_CARD: Color = Color::Rgb(54, 54, 70); // sumiInk5
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const SUCCESS: Color = GREEN;
    pub const PEACH: Color = ORANGE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_card: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_card: colors::BG_CARD,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            peach: colors::PEACH,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_card: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            peach: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Border drawn with plain ASCII, for terminals without box-drawing glyphs.
const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
    ..border::PLAIN
};

/// ASCII/Unicode glyphs for borders and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub ascii: bool,
    pub selected: &'static str,
    pub dragging: &'static str,
    pub separator: &'static str,
    pub card_border: BorderType,
    pub zone_border: BorderType,
    pub zone_border_hover: BorderType,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            ascii: true,
            selected: "*",
            dragging: "+",
            separator: "|",
            card_border: BorderType::Plain,
            zone_border: BorderType::Plain,
            zone_border_hover: BorderType::Plain,
        }
    } else {
        Glyphs {
            ascii: false,
            selected: "★",
            dragging: "✥",
            separator: "·",
            card_border: BorderType::Rounded,
            zone_border: BorderType::Rounded,
            zone_border_hover: BorderType::Double,
        }
    }
}

impl Glyphs {
    /// Applies `border` to `block`, or the ASCII border set in ASCII mode.
    #[must_use]
    pub fn border<'a>(&self, block: Block<'a>, border: BorderType) -> Block<'a> {
        if self.ascii {
            block.border_set(ASCII_BORDER)
        } else {
            block.border_type(border)
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn panel_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn card(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary).bg(palette.bg_card)
    }

    #[must_use]
    pub fn card_selected(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .bg(palette.bg_card)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn card_dragging(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn zone_hover(palette: &Palette) -> Style {
        Style::default().fg(palette.accent).bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn announcement(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }
}

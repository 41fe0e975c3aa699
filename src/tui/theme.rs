//! Color themes for the story map.

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name of the theme
    pub name: &'static str,

    // === Borders ===
    /// Primary border color
    pub border: Color,
    /// Footer and overlay borders
    pub border_dim: Color,
    /// Border of the story card
    pub border_highlight: Color,

    // === Text ===
    /// Primary text color
    pub text: Color,
    /// Labels, hints, captions
    pub text_dim: Color,
    /// Record titles and section headings
    pub text_title: Color,

    // === Status ===
    /// Image available
    pub success: Color,
    /// Image missing, click matched nothing
    pub warning: Color,
    /// Error state
    pub error: Color,

    // === Map ===
    /// Coastline and border outline
    pub map_outline: Color,
    /// The active record's marker and label
    pub marker_active: Color,
    /// Every other marker
    pub marker_inactive: Color,

    // === UI elements ===
    /// Summary card background
    pub card_bg: Color,
    /// Key names in hints and help
    pub key_hint: Color,
    /// Overlay background
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Red active marker over muted cadet-blue ones
    pub fn default_theme() -> Self {
        Self {
            name: "Default",

            border: Color::Gray,
            border_dim: Color::DarkGray,
            border_highlight: Color::Red,

            text: Color::White,
            text_dim: Color::DarkGray,
            text_title: Color::LightRed,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            map_outline: Color::Rgb(95, 158, 160),
            marker_active: Color::Red,
            marker_inactive: Color::Rgb(95, 158, 160),

            card_bg: Color::Reset,
            key_hint: Color::Yellow,
            background: Color::Black,
        }
    }

    /// Catppuccin Mocha - warm pastel theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            name: "Catppuccin Mocha",

            border: Color::Rgb(180, 190, 254),           // Lavender
            border_dim: Color::Rgb(88, 91, 112),         // Surface2
            border_highlight: Color::Rgb(243, 139, 168), // Red

            text: Color::Rgb(205, 214, 244),       // Text
            text_dim: Color::Rgb(147, 153, 178),   // Overlay1
            text_title: Color::Rgb(250, 179, 135), // Peach

            success: Color::Rgb(166, 227, 161), // Green
            warning: Color::Rgb(249, 226, 175), // Yellow
            error: Color::Rgb(243, 139, 168),   // Red

            map_outline: Color::Rgb(116, 199, 236),     // Sapphire
            marker_active: Color::Rgb(243, 139, 168),   // Red
            marker_inactive: Color::Rgb(137, 220, 235), // Sky

            card_bg: Color::Rgb(49, 50, 68),    // Surface0
            key_hint: Color::Rgb(249, 226, 175), // Yellow
            background: Color::Rgb(30, 30, 46),  // Base
        }
    }

    /// Dracula - purple/pink dark theme
    pub fn dracula() -> Self {
        Self {
            name: "Dracula",

            border: Color::Rgb(189, 147, 249),           // Purple
            border_dim: Color::Rgb(68, 71, 90),          // Current Line
            border_highlight: Color::Rgb(255, 121, 198), // Pink

            text: Color::Rgb(248, 248, 242),       // Foreground
            text_dim: Color::Rgb(98, 114, 164),    // Comment
            text_title: Color::Rgb(255, 121, 198), // Pink

            success: Color::Rgb(80, 250, 123),  // Green
            warning: Color::Rgb(241, 250, 140), // Yellow
            error: Color::Rgb(255, 85, 85),     // Red

            map_outline: Color::Rgb(98, 114, 164),      // Comment
            marker_active: Color::Rgb(255, 85, 85),     // Red
            marker_inactive: Color::Rgb(139, 233, 253), // Cyan

            card_bg: Color::Rgb(68, 71, 90),     // Current Line
            key_hint: Color::Rgb(241, 250, 140), // Yellow
            background: Color::Rgb(40, 42, 54),  // Background
        }
    }

    /// Gruvbox Dark - warm retro theme
    pub fn gruvbox() -> Self {
        Self {
            name: "Gruvbox",

            border: Color::Rgb(168, 153, 132),           // Fg4
            border_dim: Color::Rgb(80, 73, 69),          // Bg2
            border_highlight: Color::Rgb(254, 128, 25),  // Orange

            text: Color::Rgb(235, 219, 178),      // Fg
            text_dim: Color::Rgb(146, 131, 116),  // Gray
            text_title: Color::Rgb(250, 189, 47), // Yellow

            success: Color::Rgb(184, 187, 38), // Green
            warning: Color::Rgb(250, 189, 47), // Yellow
            error: Color::Rgb(251, 73, 52),    // Red

            map_outline: Color::Rgb(142, 192, 124),     // Aqua
            marker_active: Color::Rgb(251, 73, 52),     // Red
            marker_inactive: Color::Rgb(131, 165, 152), // Blue

            card_bg: Color::Rgb(60, 56, 54),     // Bg1
            key_hint: Color::Rgb(250, 189, 47),  // Yellow
            background: Color::Rgb(40, 40, 40),  // Bg0
        }
    }

    /// Nord - cool, muted arctic theme
    pub fn nord() -> Self {
        Self {
            name: "Nord",

            border: Color::Rgb(136, 192, 208),          // Frost cyan
            border_dim: Color::Rgb(76, 86, 106),        // Polar Night 3
            border_highlight: Color::Rgb(208, 135, 112), // Aurora orange

            text: Color::Rgb(236, 239, 244),       // Snow Storm 0
            text_dim: Color::Rgb(76, 86, 106),     // Polar Night 3
            text_title: Color::Rgb(235, 203, 139), // Aurora yellow

            success: Color::Rgb(163, 190, 140), // Aurora green
            warning: Color::Rgb(235, 203, 139), // Aurora yellow
            error: Color::Rgb(191, 97, 106),    // Aurora red

            map_outline: Color::Rgb(94, 129, 172),      // Frost dark blue
            marker_active: Color::Rgb(191, 97, 106),    // Aurora red
            marker_inactive: Color::Rgb(143, 188, 187), // Frost teal

            card_bg: Color::Rgb(59, 66, 82),     // Polar Night 2
            key_hint: Color::Rgb(235, 203, 139), // Aurora yellow
            background: Color::Rgb(46, 52, 64),  // Polar Night 0
        }
    }

    /// Get a theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "catppuccin" | "catppuccin-mocha" | "catppuccin_mocha" => {
                Some(Self::catppuccin_mocha())
            }
            "dracula" => Some(Self::dracula()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// List all available theme names, in cycling order
    pub fn available_themes() -> &'static [&'static str] {
        &["default", "catppuccin", "dracula", "gruvbox", "nord"]
    }

    /// Name of the theme after `name` in [`available_themes`](Self::available_themes).
    pub fn next_name(name: &str) -> &'static str {
        let themes = Self::available_themes();
        let current = themes
            .iter()
            .position(|t| Self::by_name(t).map(|t| t.name) == Self::by_name(name).map(|t| t.name))
            .unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }
}

//! Colors for each theme.

use ratatui::style::Color;
use tictactoe::Theme;

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background.
    pub background: Color,
    /// Default text.
    pub text: Color,
    /// Borders, grid lines and disabled cells.
    pub muted: Color,
    /// Title.
    pub accent: Color,
    /// Mark X.
    pub x: Color,
    /// Mark O.
    pub o: Color,
    /// Background of the winning line.
    pub winning: Color,
    /// Background under the cursor.
    pub cursor: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    x: Color::Rgb(0x1d, 0x4e, 0xd8),
    o: Color::Rgb(0xb9, 0x1c, 0x1c),
    winning: Color::Rgb(0xbb, 0xf7, 0xd0),
    cursor: Color::Rgb(0xe5, 0xe7, 0xeb),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x11, 0x18, 0x27),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0xda, 0x77, 0x56),
    x: Color::Rgb(0x60, 0xa5, 0xfa),
    o: Color::Rgb(0xf8, 0x71, 0x71),
    winning: Color::Rgb(0x16, 0x65, 0x34),
    cursor: Color::Rgb(0x37, 0x41, 0x51),
};

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

use ratatui::style::Color;

use crate::config::ThemeName;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus_border: Color,
    pub status_ok: Color,
    pub status_error: Color,
    pub you: Color,
    pub bot: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xfa, 0xfc),
    text: Color::Rgb(0x0f, 0x17, 0x2a),
    muted: Color::Rgb(0x64, 0x74, 0x8b),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    border: Color::Rgb(0xcb, 0xd5, 0xe1),
    focus_border: Color::Rgb(0x25, 0x63, 0xeb),
    status_ok: Color::Rgb(0x16, 0xa3, 0x4a),
    status_error: Color::Rgb(0xdc, 0x26, 0x26),
    you: Color::Rgb(0x7c, 0x3a, 0xed),
    bot: Color::Rgb(0x0e, 0x74, 0x90),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x0f, 0x17, 0x2a),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    border: Color::Rgb(0x40, 0x40, 0x40),
    focus_border: Color::Rgb(0x60, 0xa5, 0xfa),
    status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
    status_error: Color::Rgb(0xef, 0x44, 0x44),
    you: Color::Rgb(0xc4, 0xb5, 0xfd),
    bot: Color::Rgb(0x67, 0xe8, 0xf9),
};

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Label for the theme toggle in the header.
    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Light => "🌞 Light",
            ThemeName::Dark => "🌙 Dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
        }
    }
}

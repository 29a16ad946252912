use ratatui::style::Color;
use snapdeck_core::page::Backdrop;
use snapdeck_core::pager::Tone;

/// Runtime palette for the landing page
#[derive(Debug, Clone)]
pub struct Theme {
    // Header tones
    pub ivory: Color,
    pub black: Color,

    // Block backdrops
    pub dark_bg: Color,
    pub light_bg: Color,

    pub accent: Color,
    pub muted: Color,

    // Status line
    pub status_bg: Color,
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            ivory: Color::Rgb(0xf4, 0xef, 0xe3),
            black: Color::Rgb(0x16, 0x16, 0x16),
            dark_bg: Color::Rgb(0x1d, 0x1f, 0x21),
            light_bg: Color::Rgb(0xf4, 0xef, 0xe3),
            accent: Color::Rgb(0xe7, 0x8a, 0x4e),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            status_bg: Color::Rgb(0x32, 0x30, 0x2f),
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
        }
    }
}

impl Theme {
    pub fn backdrop_bg(&self, backdrop: Backdrop) -> Color {
        match backdrop {
            Backdrop::Dark => self.dark_bg,
            Backdrop::Light => self.light_bg,
        }
    }

    /// Text colour readable on the given backdrop
    pub fn backdrop_fg(&self, backdrop: Backdrop) -> Color {
        match backdrop {
            Backdrop::Dark => self.ivory,
            Backdrop::Light => self.black,
        }
    }

    /// Header colour for the chrome tone
    pub fn tone_fg(&self, tone: Tone) -> Color {
        match tone {
            Tone::Light => self.ivory,
            Tone::Dark => self.black,
        }
    }
}

use ratatui::style::Color;

use crate::model::UiConfig;

/// Colors for one theme variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub error: Color,
    pub selection_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Palette {
            background: Color::Rgb(0xF3, 0xF4, 0xF6),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x11, 0x18, 0x27),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            accent: Color::Rgb(0x7C, 0x3A, 0xED),
            done: Color::Rgb(0x9C, 0xA3, 0xAF),
            error: Color::Rgb(0xDC, 0x26, 0x26),
            selection_bg: Color::Rgb(0xE5, 0xE7, 0xEB),
        }
    }

    pub fn dark() -> Self {
        Palette {
            background: Color::Rgb(0x11, 0x18, 0x27),
            surface: Color::Rgb(0x1F, 0x29, 0x37),
            text: Color::Rgb(0xE5, 0xE7, 0xEB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x9C, 0xA3, 0xAF),
            accent: Color::Rgb(0xC4, 0xB5, 0xFD),
            done: Color::Rgb(0x6B, 0x72, 0x80),
            error: Color::Rgb(0xF8, 0x71, 0x71),
            selection_bg: Color::Rgb(0x37, 0x41, 0x51),
        }
    }

    fn set(&mut self, key: &str, color: Color) {
        match key {
            "background" => self.background = color,
            "surface" => self.surface = color,
            "text" => self.text = color,
            "text_bright" => self.text_bright = color,
            "dim" => self.dim = color,
            "accent" => self.accent = color,
            "done" => self.done = color,
            "error" => self.error = color,
            "selection_bg" => self.selection_bg = color,
            _ => {}
        }
    }
}

/// Light/dark theme. Only affects rendering; toggling is not saved.
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark: bool,
    light: Palette,
    dark_palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            dark: false,
            light: Palette::light(),
            dark_palette: Palette::dark(),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Build from `[ui]` config.
    ///
    /// Color keys are either plain (`accent`, applied to both palettes) or
    /// scoped (`light.accent`, `dark.accent`). Scoped keys win.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme {
            dark: ui.dark_theme,
            ..Theme::default()
        };

        let mut keys: Vec<&String> = ui.colors.keys().collect();
        // Plain keys first so scoped overrides land last
        keys.sort_by(|a, b| (a.contains('.'), a).cmp(&(b.contains('.'), b)));
        for key in keys {
            let Some(color) = parse_hex_color(&ui.colors[key]) else {
                tracing::warn!(key = %key, value = %ui.colors[key], "ignoring bad color");
                continue;
            };
            match key.split_once('.') {
                Some(("light", name)) => theme.light.set(name, color),
                Some(("dark", name)) => theme.dark_palette.set(name, color),
                Some(_) => {}
                None => {
                    theme.light.set(key, color);
                    theme.dark_palette.set(key, color);
                }
            }
        }
        theme
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// The active palette
    pub fn palette(&self) -> &Palette {
        if self.dark {
            &self.dark_palette
        } else {
            &self.light
        }
    }

    /// Icon for the theme the toggle would switch to
    pub fn toggle_icon(&self) -> &'static str {
        if self.dark { "\u{2600}" } else { "\u{263E}" }
    }
}

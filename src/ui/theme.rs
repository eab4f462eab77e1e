use ratatui::style::Color;

use crate::config::ColorsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub text_dim: Color,
    pub gauge_filled: Color,
    pub gauge_unfilled: Color,
    pub series_primary: Color,
    pub series_secondary: Color,
    pub table_header: Color,
    pub statusbar_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub warn: Color,
}

fn dark() -> Theme {
    Theme {
        border: Color::DarkGray,
        title: Color::White,
        text: Color::Gray,
        text_dim: Color::DarkGray,
        gauge_filled: Color::Rgb(0x1f, 0x53, 0x8d),
        gauge_unfilled: Color::Rgb(0x2b, 0x2b, 0x2b),
        series_primary: Color::Rgb(0x1f, 0x53, 0x8d),
        series_secondary: Color::Rgb(0xff, 0x7f, 0x0e),
        table_header: Color::White,
        statusbar_bg: Color::Rgb(0x1e, 0x1e, 0x2e),
        pill_key_fg: Color::Black,
        pill_key_bg: Color::Rgb(0x89, 0xb4, 0xfa),
        pill_desc_fg: Color::Gray,
        warn: Color::Yellow,
    }
}

fn light() -> Theme {
    Theme {
        border: Color::Gray,
        title: Color::Black,
        text: Color::DarkGray,
        text_dim: Color::Gray,
        gauge_filled: Color::Rgb(0x1f, 0x53, 0x8d),
        gauge_unfilled: Color::Rgb(0xd0, 0xd0, 0xd0),
        series_primary: Color::Rgb(0x1f, 0x53, 0x8d),
        series_secondary: Color::Rgb(0xd9, 0x64, 0x00),
        table_header: Color::Black,
        statusbar_bg: Color::Rgb(0xe0, 0xe0, 0xe8),
        pill_key_fg: Color::White,
        pill_key_bg: Color::Rgb(0x1f, 0x53, 0x8d),
        pill_desc_fg: Color::DarkGray,
        warn: Color::Rgb(0xb0, 0x60, 0x00),
    }
}

impl Theme {
    pub fn from_config(colors: &ColorsConfig) -> Self {
        let mut theme = match colors.theme.to_lowercase().as_str() {
            "light" => light(),
            _ => dark(),
        };
        if let Some(color) = parse_hex_color(&colors.primary_series) {
            theme.series_primary = color;
            theme.gauge_filled = color;
        }
        if let Some(color) = parse_hex_color(&colors.secondary_series) {
            theme.series_secondary = color;
        }
        theme
    }
}

pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

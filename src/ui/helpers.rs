use palettr::color::parse_hex;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

use super::theme::Theme;

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let (r, g, b) = parse_hex(value)?;
    Some(Color::Rgb(r, g, b))
}

/// A block of `width` cells filled with `value`, or dim dots when it is not
/// a hex color.
pub fn swatch(value: &str, width: usize) -> Span<'static> {
    match hex_to_color(value) {
        Some(color) => Span::styled(" ".repeat(width), Style::default().bg(color)),
        None => Span::styled("·".repeat(width), Style::default().fg(Theme::dim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_long_names() {
        assert_eq!(clamp_name("red", 5), "red  ");
        assert_eq!(clamp_name("deeporange", 6), "deep..");
    }

    #[test]
    fn converts_hex_to_terminal_color() {
        assert_eq!(hex_to_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(hex_to_color("orange"), None);
    }
}

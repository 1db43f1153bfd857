/// Hex color parsing and display formatting.
use crate::types::ColorFormat;

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Lower-cased `#rrggbb`, or `None` if `s` is not a hex color. The leading
/// `#` may be omitted.
pub fn normalize_hex(s: &str) -> Option<String> {
    let trimmed = s.trim();
    let with_hash = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };
    is_valid_hex(&with_hash).then(|| with_hash.to_ascii_lowercase())
}

/// Splits a hex color into its channels.
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Renders a stored color in the requested format. Values that are not hex
/// colors are returned unchanged.
pub fn format_color(value: &str, format: ColorFormat) -> String {
    let Some((r, g, b)) = parse_hex(value) else {
        return value.to_string();
    };
    match format {
        ColorFormat::Hex => format!("#{r:02x}{g:02x}{b:02x}"),
        ColorFormat::Rgb => format!("rgb({r},{g},{b})"),
        ColorFormat::Rgba => format!("rgba({r},{g},{b},1.0)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_hex() {
        assert!(is_valid_hex("#1abc9c"));
        assert!(is_valid_hex("#1ABC9C"));
        assert!(!is_valid_hex("1abc9c"));
        assert!(!is_valid_hex("#1abc9"));
        assert!(!is_valid_hex("#1abc9g"));
    }

    #[test]
    fn normalizes_user_input() {
        assert_eq!(normalize_hex(" 1ABC9C "), Some("#1abc9c".to_string()));
        assert_eq!(normalize_hex("#FFF"), None);
    }

    #[test]
    fn parse_rejects_multibyte_input() {
        assert_eq!(parse_hex("#ééé"), None);
        assert_eq!(parse_hex("#ff8000"), Some((255, 128, 0)));
    }

    #[test]
    fn formats_in_every_format() {
        assert_eq!(format_color("#FF8000", ColorFormat::Hex), "#ff8000");
        assert_eq!(format_color("#ff8000", ColorFormat::Rgb), "rgb(255,128,0)");
        assert_eq!(format_color("#ff8000", ColorFormat::Rgba), "rgba(255,128,0,1.0)");
        assert_eq!(format_color("teal", ColorFormat::Rgb), "teal");
    }
}

use ratatui::style::Color;

/// Unified color theme for the application chrome. Palette colors themselves
/// are drawn in their own color.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Confirmation messages
    pub fn success() -> Color {
        Color::Green
    }

    /// Validation problems and full palettes
    pub fn warn() -> Color {
        Color::Yellow
    }

    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// The color being moved
    pub fn grabbed() -> Color {
        Color::LightMagenta
    }

    pub fn dim() -> Color {
        Color::DarkGray
    }

    pub fn text() -> Color {
        Color::White
    }

    /// Accent for titles and counts
    pub fn accent() -> Color {
        Color::LightBlue
    }
}

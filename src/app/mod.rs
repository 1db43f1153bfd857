mod state;

use crossterm::event::KeyCode;
use palettr::{ColorFormat, FormatListener};

pub use state::{App, ColorField, NewColorPopup, SavePalettePopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Draft,
    Palettes,
    PaletteDetail,
    Help,
}

/// Display settings owned by the UI. Receives format changes from the draft
/// controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    pub format: ColorFormat,
}

impl FormatListener for DisplaySettings {
    fn format_changed(&mut self, format: ColorFormat) {
        self.format = format;
    }
}

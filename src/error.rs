use thiserror::Error;

/// Why a palette name was refused at commit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRejection {
    Empty,
    Taken,
    /// Distinct name, but its slug matches an existing palette id.
    SlugTaken,
}

impl NameRejection {
    /// Message shown next to the name field.
    pub fn message(self) -> &'static str {
        match self {
            NameRejection::Empty => "Enter Palette Name",
            NameRejection::Taken => "Name already used",
            NameRejection::SlugTaken => "Name too similar to an existing palette",
        }
    }
}

/// Rejected draft operations. A failed operation never changes the draft.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("color {color} is already in the palette")]
    DuplicateColor { color: String },
    #[error("palette is full ({max_colors} colors)")]
    CapacityExceeded { max_colors: usize },
    #[error("index {index} is out of range for {len} colors")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("every catalog color is already in the palette")]
    ExhaustedCatalog,
    #[error("invalid palette name '{name}': {}", .reason.message())]
    InvalidName { name: String, reason: NameRejection },
}

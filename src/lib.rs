//! Palette drafting: build an ordered, duplicate-free set of colors from a
//! catalog of source palettes and commit it under a unique name.

pub mod catalog;
pub mod color;
pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod library;
pub mod picker;
pub mod reorder;
pub mod slug;
pub mod types;
pub mod validate;

pub use catalog::ColorCatalog;
pub use controller::{DraftController, FormatListener, commit};
pub use draft::PaletteDraft;
pub use error::{DraftError, NameRejection};
pub use library::{PaletteLibrary, PaletteStore};
pub use types::{ColorEntry, ColorFormat, Palette};

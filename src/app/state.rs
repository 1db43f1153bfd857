use crossterm::event::KeyCode;
use palettr::color::normalize_hex;
use palettr::config::Config;
use palettr::controller::check_name;
use palettr::types::PaletteId;
use palettr::{
    ColorCatalog, ColorEntry, DraftController, DraftError, NameRejection, Palette, PaletteDraft,
    PaletteLibrary, PaletteStore,
};
use rand::rngs::ThreadRng;
use tracing::debug;

use super::{AppEvent, AppView, DisplaySettings};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub controller: DraftController,
    pub catalog: ColorCatalog,
    pub library: PaletteLibrary,
    pub display: DisplaySettings,
    pub status: Option<String>,
    pub selected_color_index: usize,
    pub selected_palette_index: usize,
    pub opened_palette: Option<PaletteId>,
    /// The selected color follows Up/Down instead of the cursor.
    pub moving: bool,
    pub save_popup: Option<SavePalettePopup>,
    pub new_color_popup: Option<NewColorPopup>,
    rng: ThreadRng,
}

#[derive(Clone, Debug, Default)]
pub struct SavePalettePopup {
    pub name: String,
}

impl SavePalettePopup {
    /// Live validation of the typed name.
    pub fn problem(&self, existing: &[Palette]) -> Option<NameRejection> {
        check_name(existing, &self.name).err()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorField {
    Name,
    Color,
}

#[derive(Clone, Debug)]
pub struct NewColorPopup {
    pub name: String,
    pub color: String,
    pub field: ColorField,
}

impl App {
    pub fn new(config: &Config, catalog: ColorCatalog) -> Self {
        let first_palette = catalog
            .palettes()
            .first()
            .map(|palette| palette.colors.clone())
            .unwrap_or_default();
        let draft = PaletteDraft::seeded(config.max_colors, first_palette);
        let controller =
            DraftController::new(draft).with_max_pick_attempts(config.max_pick_attempts);
        let library = PaletteLibrary::from_catalog(&catalog);

        Self {
            running: true,
            view: AppView::Draft,
            view_history: Vec::new(),
            controller,
            catalog,
            library,
            display: DisplaySettings {
                format: config.format,
            },
            status: None,
            selected_color_index: 0,
            selected_palette_index: 0,
            opened_palette: None,
            moving: false,
            save_popup: None,
            new_color_popup: None,
            rng: rand::rng(),
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    pub fn draft(&self) -> &PaletteDraft {
        self.controller.draft()
    }

    pub fn opened_palette(&self) -> Option<&Palette> {
        self.opened_palette
            .as_deref()
            .and_then(|id| self.library.find(id))
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.save_popup.is_some() {
            self.handle_save_key(key);
            return;
        }
        if self.new_color_popup.is_some() {
            self.handle_new_color_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('e') => self.navigate_to(AppView::Draft),
            KeyCode::Char('p') => self.navigate_to(AppView::Palettes),
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Char('f') => self.cycle_format(),
            KeyCode::Esc => self.go_back(),
            _ => match self.view {
                AppView::Draft => self.handle_draft_key(key),
                AppView::Palettes => self.handle_palettes_key(key),
                AppView::PaletteDetail | AppView::Help => {}
            },
        }
    }

    fn handle_draft_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char('m') => self.toggle_moving(),
            KeyCode::Char('r') => self.add_random_color(),
            KeyCode::Char('n') => self.open_new_color_popup(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_color(),
            KeyCode::Char('x') => self.clear_colors(),
            KeyCode::Char('s') => self.open_save_popup(),
            _ => {}
        }
    }

    fn handle_palettes_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.selected_palette_index = self.selected_palette_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_palette_index + 1 < self.library.len() {
                    self.selected_palette_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self
                    .library
                    .palettes()
                    .get(self.selected_palette_index)
                    .map(|palette| palette.id.clone())
                {
                    self.open_palette(id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_palette(),
            _ => {}
        }
    }

    fn handle_save_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.save_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_save_popup(),
            KeyCode::Backspace | KeyCode::Delete => {
                if let Some(popup) = self.save_popup.as_mut() {
                    popup.name.pop();
                }
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                if let Some(popup) = self.save_popup.as_mut() {
                    popup.name.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_new_color_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.new_color_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_new_color_popup(),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(popup) = self.new_color_popup.as_mut() {
                    popup.field = match popup.field {
                        ColorField::Name => ColorField::Color,
                        ColorField::Color => ColorField::Name,
                    };
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if let Some(popup) = self.new_color_popup.as_mut() {
                    match popup.field {
                        ColorField::Name => popup.name.pop(),
                        ColorField::Color => popup.color.pop(),
                    };
                }
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                if let Some(popup) = self.new_color_popup.as_mut() {
                    match popup.field {
                        ColorField::Name => popup.name.push(ch),
                        ColorField::Color => popup.color.push(ch),
                    }
                }
            }
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view.clone());
            self.view = view;
            self.moving = false;
        }
    }

    fn go_back(&mut self) {
        if self.moving {
            self.moving = false;
            self.clear_status();
            return;
        }
        if let Some(view) = self.view_history.pop() {
            self.view = view;
        }
        self.clear_status();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn open_palette(&mut self, id: PaletteId) {
        if let Some(index) = self.library.position(&id) {
            self.selected_palette_index = index;
        }
        self.opened_palette = Some(id);
        self.navigate_to(AppView::PaletteDetail);
    }

    fn delete_selected_palette(&mut self) {
        let Some(id) = self
            .library
            .palettes()
            .get(self.selected_palette_index)
            .map(|palette| palette.id.clone())
        else {
            self.status = Some("No palette selected.".to_string());
            return;
        };
        let Some(deleted) = self.library.delete(&id) else {
            return;
        };
        if self.opened_palette.as_deref() == Some(id.as_str()) {
            self.opened_palette = None;
        }
        let len = self.library.len();
        if self.selected_palette_index >= len {
            self.selected_palette_index = len.saturating_sub(1);
        }
        self.status = Some(format!("Deleted '{}'.", deleted.palette_name));
    }

    fn cycle_format(&mut self) {
        let format = self.display.format.next();
        self.controller
            .handle_format_change(format, &mut self.display);
        self.status = Some(format!(
            "Format changed to {}",
            format.as_str().to_uppercase()
        ));
    }

    fn move_up(&mut self) {
        if self.selected_color_index == 0 {
            return;
        }
        if self.moving {
            let from = self.selected_color_index;
            if let Err(err) = self.controller.reorder(from, from - 1) {
                self.status = Some(err.to_string());
                return;
            }
        }
        self.selected_color_index -= 1;
    }

    fn move_down(&mut self) {
        if self.selected_color_index + 1 >= self.draft().len() {
            return;
        }
        if self.moving {
            let from = self.selected_color_index;
            if let Err(err) = self.controller.reorder(from, from + 1) {
                self.status = Some(err.to_string());
                return;
            }
        }
        self.selected_color_index += 1;
    }

    fn toggle_moving(&mut self) {
        if self.moving {
            self.moving = false;
            self.clear_status();
            return;
        }
        let Some(entry) = self.draft().colors().get(self.selected_color_index) else {
            self.status = Some("No color selected.".to_string());
            return;
        };
        self.status = Some(format!(
            "Moving '{}'. Up/Down to move, m to drop.",
            entry.name
        ));
        self.moving = true;
    }

    fn add_random_color(&mut self) {
        match self.controller.add_random(&self.catalog, &mut self.rng) {
            Ok(entry) => {
                self.selected_color_index = self.draft().len() - 1;
                self.status = Some(format!("Added {}.", entry.name));
            }
            Err(DraftError::CapacityExceeded { .. }) => {
                self.status = Some("Palette is full.".to_string());
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn remove_selected_color(&mut self) {
        let Some(removed) = self.controller.remove_at(self.selected_color_index) else {
            self.status = Some("No color selected.".to_string());
            return;
        };
        self.status = Some(format!("Removed {}.", removed.name));
        self.clamp_color_selection();
    }

    fn clear_colors(&mut self) {
        self.controller.clear();
        self.moving = false;
        self.selected_color_index = 0;
        self.status = Some("Palette cleared.".to_string());
    }

    fn clamp_color_selection(&mut self) {
        let len = self.draft().len();
        if self.selected_color_index >= len {
            self.selected_color_index = len.saturating_sub(1);
        }
        if len == 0 {
            self.moving = false;
        }
    }

    fn open_new_color_popup(&mut self) {
        if self.draft().is_full() {
            self.status = Some("Palette is full.".to_string());
            return;
        }
        self.new_color_popup = Some(NewColorPopup {
            name: String::new(),
            color: String::new(),
            field: ColorField::Name,
        });
    }

    fn apply_new_color_popup(&mut self) {
        let Some(popup) = self.new_color_popup.as_ref() else {
            return;
        };
        let name = popup.name.trim().to_string();
        if name.is_empty() {
            self.status = Some("Color name is required.".to_string());
            return;
        }
        if self.draft().colors().iter().any(|entry| entry.name == name) {
            self.status = Some("Color name must be unique.".to_string());
            return;
        }
        let Some(color) = normalize_hex(&popup.color) else {
            self.status = Some("Color must be a 6-digit hex value.".to_string());
            return;
        };

        if let Err(err) = self.controller.add(ColorEntry::new(name.clone(), color)) {
            self.status = Some(err.to_string());
            return;
        }
        self.new_color_popup = None;
        self.selected_color_index = self.draft().len() - 1;
        self.status = Some(format!("Added {name}."));
    }

    fn open_save_popup(&mut self) {
        self.moving = false;
        self.save_popup = Some(SavePalettePopup::default());
    }

    fn apply_save_popup(&mut self) {
        let Some(popup) = self.save_popup.as_ref() else {
            return;
        };
        let name = popup.name.clone();
        match self.controller.save(&name, &mut self.library) {
            Ok(palette) => {
                debug!(id = %palette.id, "navigating to saved palette");
                self.save_popup = None;
                self.status = Some(format!("Palette '{}' saved.", palette.palette_name));
                self.open_palette(palette.id);
            }
            Err(DraftError::InvalidName { reason, .. }) => {
                self.status = Some(reason.message().to_string());
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }
}

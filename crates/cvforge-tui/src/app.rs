//! Application state and logic
//!
//! Holds the four state cells the editor works over — document store,
//! style configuration, section registry, and preview — plus the pane
//! focus and in-progress edit. All transitions are plain methods so they
//! can be unit tested without a terminal.

use cvforge_core::{
    DocumentStore, EntryField, EntryKind, FontFamily, Preview, Section, SectionRegistry,
    StyleConfig,
};

use crate::forms::{EDUCATION_FIELDS, EXPERIENCE_FIELDS, PROFILE_FIELDS};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Sections,
    Form,
    Style,
}

impl ActivePane {
    /// Move to the next pane (wrapping)
    pub fn next(self) -> Self {
        match self {
            ActivePane::Sections => ActivePane::Form,
            ActivePane::Form => ActivePane::Style,
            ActivePane::Style => ActivePane::Sections,
        }
    }

    /// Move to the previous pane (wrapping)
    pub fn prev(self) -> Self {
        match self {
            ActivePane::Sections => ActivePane::Style,
            ActivePane::Form => ActivePane::Sections,
            ActivePane::Style => ActivePane::Form,
        }
    }
}

/// Rows in the style pane, top to bottom
pub const STYLE_ROWS: usize = 4;

/// Text input in progress on the focused form field
#[derive(Debug, Clone)]
pub struct EditState {
    pub buffer: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl EditState {
    fn new(value: String) -> Self {
        let cursor = value.chars().count();
        Self { buffer: value, cursor }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.buffer.remove(at);
    }

    fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn right(&mut self) {
        let max = self.buffer.chars().count();
        self.cursor = (self.cursor + 1).min(max);
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// The document being edited
    pub store: DocumentStore,
    /// Active style selection
    pub style: StyleConfig,
    /// Which section's form is showing
    pub registry: SectionRegistry,
    /// Preview overlay state
    pub preview: Preview,
    /// Which pane has focus
    pub active_pane: ActivePane,
    /// Selected section in the sidebar (always in sync with the registry)
    pub section_index: usize,
    /// Focused row in the form pane
    pub field_index: usize,
    /// Focused row in the style pane
    pub style_index: usize,
    /// Text input in progress, if any
    pub editing: Option<EditState>,
    /// Raw skills text while the skills form is in use
    pub skills_text: String,
    /// Status message to display temporarily
    pub status_message: Option<String>,
}

impl App {
    /// Create the app with a seeded style configuration
    pub fn new(style: StyleConfig) -> Self {
        let store = DocumentStore::new();
        let skills_text = store.snapshot().skills_text();
        Self {
            should_quit: false,
            store,
            style,
            registry: SectionRegistry::new(),
            preview: Preview::new(),
            active_pane: ActivePane::Sections,
            section_index: 0,
            field_index: 0,
            style_index: 0,
            editing: None,
            skills_text,
            status_message: None,
        }
    }

    /// The section the form pane is editing
    pub fn active_section(&self) -> Section {
        self.registry.active()
    }

    /// Number of focusable rows in the current form
    pub fn form_row_count(&self) -> usize {
        match self.active_section() {
            Section::Profile => PROFILE_FIELDS.len(),
            Section::Summary => 1,
            Section::Experience => {
                self.store.snapshot().experience.len() * EXPERIENCE_FIELDS.len()
            }
            Section::Education => self.store.snapshot().education.len() * EDUCATION_FIELDS.len(),
            Section::Skills => 1,
            _ => 0,
        }
    }

    // ==================== Navigation ====================

    pub fn next_pane(&mut self) {
        self.editing = None;
        self.active_pane = self.active_pane.next();
    }

    pub fn prev_pane(&mut self) {
        self.editing = None;
        self.active_pane = self.active_pane.prev();
    }

    /// Move selection up in the focused pane
    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Sections => {
                if self.section_index > 0 {
                    self.select_section(self.section_index - 1);
                }
            }
            ActivePane::Form => {
                self.field_index = self.field_index.saturating_sub(1);
            }
            ActivePane::Style => {
                self.style_index = self.style_index.saturating_sub(1);
            }
        }
    }

    /// Move selection down in the focused pane
    pub fn move_down(&mut self) {
        match self.active_pane {
            ActivePane::Sections => {
                if self.section_index < Section::ALL.len() - 1 {
                    self.select_section(self.section_index + 1);
                }
            }
            ActivePane::Form => {
                let max = self.form_row_count().saturating_sub(1);
                self.field_index = (self.field_index + 1).min(max);
            }
            ActivePane::Style => {
                self.style_index = (self.style_index + 1).min(STYLE_ROWS - 1);
            }
        }
    }

    /// Left key: adjust in the style pane, otherwise move pane focus
    pub fn left(&mut self) {
        if self.active_pane == ActivePane::Style {
            self.adjust_style(-1);
        } else {
            self.prev_pane();
        }
    }

    /// Right key: adjust in the style pane, otherwise move pane focus
    pub fn right(&mut self) {
        if self.active_pane == ActivePane::Style {
            self.adjust_style(1);
        } else {
            self.next_pane();
        }
    }

    /// Enter key in the focused pane
    pub fn handle_enter(&mut self) {
        match self.active_pane {
            ActivePane::Sections => {
                self.active_pane = ActivePane::Form;
            }
            ActivePane::Form => self.start_edit(),
            ActivePane::Style => {}
        }
    }

    fn select_section(&mut self, index: usize) {
        self.section_index = index;
        self.registry.select(Section::ALL[index]);
        self.field_index = 0;
        self.editing = None;
        if self.registry.active() == Section::Skills {
            self.skills_text = self.store.snapshot().skills_text();
        }
    }

    // ==================== Editing ====================

    /// Begin editing the focused form field
    pub fn start_edit(&mut self) {
        if self.active_pane != ActivePane::Form || self.form_row_count() == 0 {
            return;
        }
        self.editing = Some(EditState::new(self.focused_value()));
    }

    /// Finish editing (the value is already applied keystroke by keystroke)
    pub fn stop_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Insert a character at the cursor and apply the new value
    pub fn input_char(&mut self, c: char) {
        if let Some(edit) = self.editing.as_mut() {
            edit.insert(c);
            self.apply_edit();
        }
    }

    /// Delete the character before the cursor and apply the new value
    pub fn backspace(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.backspace();
            self.apply_edit();
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.left();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.right();
        }
    }

    /// Value currently in the focused form field
    pub fn focused_value(&self) -> String {
        let snapshot = self.store.snapshot();
        match self.active_section() {
            Section::Profile => {
                let (field, _) = PROFILE_FIELDS[self.field_index];
                snapshot.profile.field(field).to_string()
            }
            Section::Summary => snapshot.summary.clone(),
            Section::Experience => {
                let entry = &snapshot.experience[self.field_index / EXPERIENCE_FIELDS.len()];
                let (field, _) = EXPERIENCE_FIELDS[self.field_index % EXPERIENCE_FIELDS.len()];
                entry.field(field).to_string()
            }
            Section::Education => {
                let entry = &snapshot.education[self.field_index / EDUCATION_FIELDS.len()];
                let (field, _) = EDUCATION_FIELDS[self.field_index % EDUCATION_FIELDS.len()];
                entry.field(field).to_string()
            }
            Section::Skills => self.skills_text.clone(),
            _ => String::new(),
        }
    }

    /// Route the edit buffer into the document store
    ///
    /// Called on every keystroke so the projection stays live while typing.
    fn apply_edit(&mut self) {
        let Some(edit) = self.editing.as_ref() else {
            return;
        };
        let value = edit.buffer.clone();

        match self.active_section() {
            Section::Profile => {
                let (field, _) = PROFILE_FIELDS[self.field_index];
                self.store.set_profile_field(field, value);
            }
            Section::Summary => self.store.set_summary(value),
            Section::Experience => {
                let entry_index = self.field_index / EXPERIENCE_FIELDS.len();
                let id = self.store.snapshot().experience[entry_index].id;
                let (field, _) = EXPERIENCE_FIELDS[self.field_index % EXPERIENCE_FIELDS.len()];
                self.store
                    .update_entry(id, EntryField::Experience(field), value);
            }
            Section::Education => {
                let entry_index = self.field_index / EDUCATION_FIELDS.len();
                let id = self.store.snapshot().education[entry_index].id;
                let (field, _) = EDUCATION_FIELDS[self.field_index % EDUCATION_FIELDS.len()];
                self.store
                    .update_entry(id, EntryField::Education(field), value);
            }
            Section::Skills => {
                self.skills_text = value;
                self.store.set_skills_from_text(&self.skills_text);
            }
            _ => {}
        }
    }

    // ==================== Entries ====================

    /// Append a new entry in the experience/education forms
    pub fn add_entry_key(&mut self) {
        if self.active_pane != ActivePane::Form {
            return;
        }
        let (kind, per_entry) = match self.active_section() {
            Section::Experience => (EntryKind::Experience, EXPERIENCE_FIELDS.len()),
            Section::Education => (EntryKind::Education, EDUCATION_FIELDS.len()),
            _ => return,
        };

        self.store.add_entry(kind);
        // Jump focus to the first field of the new entry.
        self.field_index = (self.entry_count(kind) - 1) * per_entry;
        self.status_message = Some("Entry added".to_string());
    }

    /// Remove the entry the focused field belongs to
    pub fn delete_entry_key(&mut self) {
        if self.active_pane != ActivePane::Form {
            return;
        }
        let (kind, per_entry) = match self.active_section() {
            Section::Experience => (EntryKind::Experience, EXPERIENCE_FIELDS.len()),
            Section::Education => (EntryKind::Education, EDUCATION_FIELDS.len()),
            _ => return,
        };
        if self.entry_count(kind) == 0 {
            return;
        }

        let entry_index = self.field_index / per_entry;
        let id = match kind {
            EntryKind::Experience => self.store.snapshot().experience[entry_index].id,
            EntryKind::Education => self.store.snapshot().education[entry_index].id,
        };
        self.store.remove_entry(kind, id);
        self.editing = None;
        self.field_index = self.field_index.min(self.form_row_count().saturating_sub(1));
        self.status_message = Some("Entry removed".to_string());
    }

    fn entry_count(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Experience => self.store.snapshot().experience.len(),
            EntryKind::Education => self.store.snapshot().education.len(),
        }
    }

    // ==================== Style ====================

    /// Adjust the focused style row by one step in either direction
    pub fn adjust_style(&mut self, direction: i32) {
        match self.style_index {
            0 => {
                let count = cvforge_core::COLOR_PRESETS.len();
                let current = self.style.preset_index();
                let next = (current + count).wrapping_add_signed(direction as isize) % count;
                self.style.set_preset(next);
            }
            1 => {
                let fonts = FontFamily::ALL;
                let current = fonts
                    .iter()
                    .position(|f| *f == self.style.font_family())
                    .unwrap_or(0);
                let next =
                    (current + fonts.len()).wrapping_add_signed(direction as isize) % fonts.len();
                self.style.set_font(fonts[next]);
            }
            2 => {
                self.style
                    .set_font_size(self.style.font_size() as i32 + direction);
            }
            3 => {
                self.style
                    .set_line_spacing(self.style.line_spacing() + 0.1 * direction as f32);
            }
            _ => {}
        }
    }

    // ==================== Preview ====================

    pub fn toggle_preview(&mut self) {
        self.editing = None;
        self.preview.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvforge_core::ProfileField;

    fn app() -> App {
        App::new(StyleConfig::default())
    }

    #[test]
    fn test_active_pane_cycles() {
        assert_eq!(ActivePane::Sections.next(), ActivePane::Form);
        assert_eq!(ActivePane::Form.next(), ActivePane::Style);
        assert_eq!(ActivePane::Style.next(), ActivePane::Sections);
        assert_eq!(ActivePane::Sections.prev(), ActivePane::Style);
    }

    #[test]
    fn test_moving_section_selection_updates_registry() {
        let mut app = app();
        assert_eq!(app.active_section(), Section::Profile);

        app.move_down();
        assert_eq!(app.active_section(), Section::Summary);
        app.move_down();
        assert_eq!(app.active_section(), Section::Experience);
        app.move_up();
        assert_eq!(app.active_section(), Section::Summary);
    }

    #[test]
    fn test_section_selection_stops_at_ends() {
        let mut app = app();
        app.move_up();
        assert_eq!(app.section_index, 0);

        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.section_index, Section::ALL.len() - 1);
        assert_eq!(app.active_section(), Section::Social);
    }

    #[test]
    fn test_editing_profile_field_applies_per_keystroke() {
        let mut app = app();
        app.active_pane = ActivePane::Form;
        app.start_edit();

        let before = app.store.revision();
        app.input_char('J');
        app.input_char('o');

        assert_eq!(app.store.snapshot().profile.name, "Jo");
        assert_eq!(app.store.revision(), before + 2);

        app.backspace();
        assert_eq!(app.store.snapshot().profile.name, "J");
    }

    #[test]
    fn test_edit_cursor_moves_within_buffer() {
        let mut app = app();
        app.active_pane = ActivePane::Form;
        app.start_edit();

        for c in "Jne".chars() {
            app.input_char(c);
        }
        app.cursor_left();
        app.cursor_left();
        app.input_char('a');

        assert_eq!(app.store.snapshot().profile.name, "Jane");
    }

    #[test]
    fn test_stop_edit_keeps_value() {
        let mut app = app();
        app.active_pane = ActivePane::Form;
        app.start_edit();
        app.input_char('X');
        app.stop_edit();

        assert!(!app.is_editing());
        assert_eq!(app.store.snapshot().profile.name, "X");
    }

    #[test]
    fn test_form_rows_follow_entries() {
        let mut app = app();
        // Experience is section index 2; one starter entry.
        app.select_section(2);
        assert_eq!(app.form_row_count(), 5);

        app.active_pane = ActivePane::Form;
        app.add_entry_key();
        assert_eq!(app.form_row_count(), 10);
        // Focus jumped to the new entry's first field.
        assert_eq!(app.field_index, 5);
    }

    #[test]
    fn test_delete_entry_clamps_focus() {
        let mut app = app();
        app.select_section(2);
        app.active_pane = ActivePane::Form;
        app.add_entry_key();
        assert_eq!(app.form_row_count(), 10);

        app.delete_entry_key();
        assert_eq!(app.form_row_count(), 5);
        assert!(app.field_index < 5);

        app.delete_entry_key();
        assert_eq!(app.form_row_count(), 0);
        assert_eq!(app.field_index, 0);

        // Nothing left to delete; stays a no-op.
        app.delete_entry_key();
        assert_eq!(app.form_row_count(), 0);
    }

    #[test]
    fn test_skills_typing_resplits_live() {
        let mut app = app();
        // Skills is section index 4.
        app.select_section(4);
        app.active_pane = ActivePane::Form;
        app.start_edit();

        for c in "Rust, ,Go".chars() {
            app.input_char(c);
        }

        assert_eq!(app.store.snapshot().skills, vec!["Rust", "Go"]);
        assert_eq!(app.skills_text, "Rust, ,Go");
    }

    #[test]
    fn test_placeholder_sections_have_no_rows() {
        let mut app = app();
        // Projects is section index 5.
        app.select_section(5);
        assert_eq!(app.form_row_count(), 0);

        app.active_pane = ActivePane::Form;
        app.start_edit();
        assert!(!app.is_editing());
    }

    #[test]
    fn test_style_adjustments_route_through_clamps() {
        let mut app = app();
        app.active_pane = ActivePane::Style;

        // Preset row wraps in both directions.
        app.adjust_style(-1);
        assert_eq!(app.style.preset_index(), 5);
        app.adjust_style(1);
        assert_eq!(app.style.preset_index(), 0);

        // Font size clamps at the bounds.
        app.style_index = 2;
        for _ in 0..20 {
            app.adjust_style(1);
        }
        assert_eq!(app.style.font_size(), 16);
        for _ in 0..20 {
            app.adjust_style(-1);
        }
        assert_eq!(app.style.font_size(), 10);

        // Line spacing clamps too.
        app.style_index = 3;
        for _ in 0..20 {
            app.adjust_style(-1);
        }
        assert_eq!(app.style.line_spacing(), 1.0);
    }

    #[test]
    fn test_left_right_switch_panes_outside_style() {
        let mut app = app();
        app.right();
        assert_eq!(app.active_pane, ActivePane::Form);
        app.left();
        assert_eq!(app.active_pane, ActivePane::Sections);

        // In the style pane the same keys adjust values instead.
        app.active_pane = ActivePane::Style;
        app.right();
        assert_eq!(app.active_pane, ActivePane::Style);
        assert_eq!(app.style.preset_index(), 1);
    }

    #[test]
    fn test_preview_toggle_cancels_editing() {
        let mut app = app();
        app.active_pane = ActivePane::Form;
        app.start_edit();
        assert!(app.is_editing());

        app.toggle_preview();
        assert!(app.preview.is_open());
        assert!(!app.is_editing());

        app.toggle_preview();
        assert!(!app.preview.is_open());
    }

    #[test]
    fn test_enter_in_sections_moves_to_form() {
        let mut app = app();
        app.handle_enter();
        assert_eq!(app.active_pane, ActivePane::Form);
        assert!(!app.is_editing());

        app.handle_enter();
        assert!(app.is_editing());
    }

    #[test]
    fn test_focused_value_reads_profile() {
        let mut app = app();
        app.store.set_profile_field(ProfileField::Name, "Jane Doe");
        app.active_pane = ActivePane::Form;
        assert_eq!(app.focused_value(), "Jane Doe");
    }
}

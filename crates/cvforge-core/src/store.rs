//! Document store
//!
//! The `DocumentStore` is the single owned state cell for one editing
//! session's resume. Every mutation applies a pure operation from
//! [`crate::models`] and swaps the snapshot wholesale, bumping a revision
//! counter so dependent views can detect change by comparing one integer.
//!
//! All mutations are synchronous and atomic from the caller's side; the
//! store performs no I/O and needs no locking — it belongs to exactly one
//! session.

use crate::models::{EntryField, EntryId, EntryKind, ProfileField, Resume};

/// Owns the current resume snapshot for an editing session
#[derive(Debug, Clone)]
pub struct DocumentStore {
    resume: Resume,
    revision: u64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create a store holding the starter document
    pub fn new() -> Self {
        Self::with_resume(Resume::starter())
    }

    /// Create a store holding a specific document
    pub fn with_resume(resume: Resume) -> Self {
        Self { resume, revision: 0 }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> &Resume {
        &self.resume
    }

    /// Counts mutation operations applied to this store
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole document
    pub fn replace(&mut self, resume: Resume) {
        self.apply(resume);
    }

    /// Replace one profile field
    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(?field, len = value.len(), "set profile field");
        self.apply(self.resume.with_profile_field(field, value));
    }

    /// Replace the summary text
    pub fn set_summary(&mut self, text: impl Into<String>) {
        self.apply(self.resume.with_summary(text));
    }

    /// Append a blank experience entry, returning its id
    pub fn add_experience(&mut self) -> EntryId {
        self.add_entry(EntryKind::Experience)
    }

    /// Append a blank education entry, returning its id
    pub fn add_education(&mut self) -> EntryId {
        self.add_entry(EntryKind::Education)
    }

    /// Append a blank entry to the list of `kind`, returning its id
    pub fn add_entry(&mut self, kind: EntryKind) -> EntryId {
        let (next, id) = self.resume.with_new_entry(kind);
        tracing::debug!(?kind, %id, "add entry");
        self.apply(next);
        id
    }

    /// Replace one field of the entry with `id`; unmatched ids are no-ops
    pub fn update_entry(&mut self, id: EntryId, field: EntryField, value: impl Into<String>) {
        self.apply(self.resume.with_entry_field(id, field, value));
    }

    /// Remove the entry with `id`; missing ids are no-ops
    pub fn remove_entry(&mut self, kind: EntryKind, id: EntryId) {
        tracing::debug!(?kind, %id, "remove entry");
        self.apply(self.resume.without_entry(kind, id));
    }

    /// Replace the skill list from comma-separated text
    pub fn set_skills_from_text(&mut self, raw: &str) {
        self.apply(self.resume.with_skills_from_text(raw));
    }

    fn apply(&mut self, next: Resume) {
        self.resume = next;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceField;

    #[test]
    fn test_new_holds_starter_document() {
        let store = DocumentStore::new();
        assert_eq!(store.snapshot().experience.len(), 1);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_mutations_bump_revision() {
        let mut store = DocumentStore::new();

        store.set_profile_field(ProfileField::Name, "Jane Doe");
        assert_eq!(store.revision(), 1);
        assert_eq!(store.snapshot().profile.name, "Jane Doe");

        store.set_summary("Hello.");
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_add_and_update_entry() {
        let mut store = DocumentStore::with_resume(Resume::default());
        let id = store.add_experience();

        store.update_entry(
            id,
            EntryField::Experience(ExperienceField::Company),
            "Acme",
        );

        let snapshot = store.snapshot();
        assert_eq!(snapshot.experience.len(), 1);
        assert_eq!(snapshot.experience[0].company, "Acme");
    }

    #[test]
    fn test_remove_entry() {
        let mut store = DocumentStore::with_resume(Resume::default());
        let id = store.add_education();
        assert_eq!(store.snapshot().education.len(), 1);

        store.remove_entry(EntryKind::Education, id);
        assert!(store.snapshot().education.is_empty());
    }

    #[test]
    fn test_remove_missing_entry_keeps_document() {
        let mut store = DocumentStore::new();
        let before = store.snapshot().clone();

        store.remove_entry(EntryKind::Experience, EntryId::fresh());
        assert_eq!(*store.snapshot(), before);
    }

    #[test]
    fn test_skills_route_through_splitter() {
        let mut store = DocumentStore::new();
        store.set_skills_from_text("Rust, ,Go,");
        assert_eq!(store.snapshot().skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let mut store = DocumentStore::new();
        store.replace(Resume::default());
        assert!(store.snapshot().experience.is_empty());
        assert_eq!(store.revision(), 1);
    }
}

//! Resume data model
//!
//! Defines the canonical resume document: profile, summary, experience and
//! education entries, and skills. The document is immutable value data —
//! every update operation returns a new `Resume` and leaves the input
//! untouched. The owning shell replaces its snapshot wholesale and
//! re-renders from the latest one, which makes change detection trivial.
//!
//! No operation here fails: absent or empty values are preserved as empty
//! strings, and lookups for ids that no longer exist are no-ops.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Identity and contact fields shown in the resume header
///
/// Every field is optional free-form text; empty string means "unset".
/// `image` is an opaque URI or blob handle for the profile photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub image: String,
}

/// Names one scalar field of [`Profile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
    Image,
}

impl Profile {
    /// Read the named field
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::Website => &self.website,
            ProfileField::Image => &self.image,
        }
    }

    /// Return a copy with the named field replaced
    pub fn with_field(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            ProfileField::Name => &mut next.name,
            ProfileField::Title => &mut next.title,
            ProfileField::Email => &mut next.email,
            ProfileField::Phone => &mut next.phone,
            ProfileField::Location => &mut next.location,
            ProfileField::Website => &mut next.website,
            ProfileField::Image => &mut next.image,
        };
        *slot = value.into();
        next
    }
}

/// Stable identifier for an experience or education entry
///
/// Assigned once at creation and never recomputed. Uniqueness is promised
/// within the entry's own list; experience and education ids may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a new random id
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// Generate an id guaranteed not to collide with any of `existing`
    ///
    /// A v4 collision is vanishingly unlikely; the retry loop turns the
    /// uniqueness contract from probabilistic into unconditional.
    pub fn fresh_among(existing: &[EntryId]) -> Self {
        loop {
            let id = Self::fresh();
            if !existing.contains(&id) {
                return id;
            }
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error parsing an [`EntryId`] from a string
#[derive(Error, Debug)]
#[error("Invalid entry id '{input}': {source}")]
pub struct ParseEntryIdError {
    input: String,
    #[source]
    source: uuid::Error,
}

impl FromStr for EntryId {
    type Err = ParseEntryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|source| ParseEntryIdError {
                input: s.to_string(),
                source,
            })
    }
}

/// One work-experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Names one text field of [`Experience`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}

impl Experience {
    /// Create an entry with all text fields empty
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    pub fn field(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Position => &self.position,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
            ExperienceField::Description => &self.description,
        }
    }

    fn with_field(&self, field: ExperienceField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            ExperienceField::Company => &mut next.company,
            ExperienceField::Position => &mut next.position,
            ExperienceField::StartDate => &mut next.start_date,
            ExperienceField::EndDate => &mut next.end_date,
            ExperienceField::Description => &mut next.description,
        };
        *slot = value.into();
        next
    }
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    /// Field of study ("Computer Science")
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

/// Names one text field of [`Education`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    School,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
}

impl Education {
    /// Create an entry with all text fields empty
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            school: String::new(),
            degree: String::new(),
            field_of_study: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    pub fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::FieldOfStudy => &self.field_of_study,
            EducationField::StartDate => &self.start_date,
            EducationField::EndDate => &self.end_date,
        }
    }

    fn with_field(&self, field: EducationField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            EducationField::School => &mut next.school,
            EducationField::Degree => &mut next.degree,
            EducationField::FieldOfStudy => &mut next.field_of_study,
            EducationField::StartDate => &mut next.start_date,
            EducationField::EndDate => &mut next.end_date,
        };
        *slot = value.into();
        next
    }
}

/// Which entry list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Experience,
    Education,
}

/// Names a field on an entry of either kind
///
/// Carrying the kind in the type makes "unknown list kind" unrepresentable:
/// an update is always routed to the list its field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryField {
    Experience(ExperienceField),
    Education(EducationField),
}

impl EntryField {
    pub fn kind(self) -> EntryKind {
        match self {
            EntryField::Experience(_) => EntryKind::Experience,
            EntryField::Education(_) => EntryKind::Education,
        }
    }
}

/// The full resume document
///
/// Entry sequences are ordered; insertion order is display order. Skill
/// uniqueness is not enforced, but blank skills never occur (the skills
/// setter drops them).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub profile: Profile,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl Resume {
    /// The document the editor opens with: one blank experience entry and
    /// one blank education entry, everything else empty
    pub fn starter() -> Self {
        Self {
            experience: vec![Experience::blank(EntryId::fresh())],
            education: vec![Education::blank(EntryId::fresh())],
            ..Self::default()
        }
    }

    /// Return a copy with one profile field replaced
    pub fn with_profile_field(&self, field: ProfileField, value: impl Into<String>) -> Self {
        Self {
            profile: self.profile.with_field(field, value),
            ..self.clone()
        }
    }

    /// Return a copy with the summary replaced
    pub fn with_summary(&self, text: impl Into<String>) -> Self {
        Self {
            summary: text.into(),
            ..self.clone()
        }
    }

    /// Append a blank entry to the list of `kind`
    ///
    /// The new entry's id is freshly generated and distinct from every id
    /// already in that list.
    pub fn with_new_entry(&self, kind: EntryKind) -> (Self, EntryId) {
        let mut next = self.clone();
        let id = match kind {
            EntryKind::Experience => {
                let ids: Vec<EntryId> = next.experience.iter().map(|e| e.id).collect();
                let id = EntryId::fresh_among(&ids);
                next.experience.push(Experience::blank(id));
                id
            }
            EntryKind::Education => {
                let ids: Vec<EntryId> = next.education.iter().map(|e| e.id).collect();
                let id = EntryId::fresh_among(&ids);
                next.education.push(Education::blank(id));
                id
            }
        };
        (next, id)
    }

    /// Replace one field of the entry with `id`
    ///
    /// If no entry matches the id, the document is returned unchanged.
    pub fn with_entry_field(
        &self,
        id: EntryId,
        field: EntryField,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            EntryField::Experience(f) => {
                next.experience = next
                    .experience
                    .iter()
                    .map(|e| if e.id == id { e.with_field(f, value.clone()) } else { e.clone() })
                    .collect();
            }
            EntryField::Education(f) => {
                next.education = next
                    .education
                    .iter()
                    .map(|e| if e.id == id { e.with_field(f, value.clone()) } else { e.clone() })
                    .collect();
            }
        }
        next
    }

    /// Remove the entry with `id` from the list of `kind`
    ///
    /// Removing an id that is not present is a no-op.
    pub fn without_entry(&self, kind: EntryKind, id: EntryId) -> Self {
        let mut next = self.clone();
        match kind {
            EntryKind::Experience => next.experience.retain(|e| e.id != id),
            EntryKind::Education => next.education.retain(|e| e.id != id),
        }
        next
    }

    /// Replace the skill list from comma-separated text
    ///
    /// Tokens are trimmed and blank tokens dropped; order follows the text
    /// left to right and duplicates are retained.
    pub fn with_skills_from_text(&self, raw: &str) -> Self {
        Self {
            skills: raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            ..self.clone()
        }
    }

    /// The skills rendered back to the comma-separated form the editor shows
    pub fn skills_text(&self) -> String {
        self.skills.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_shape() {
        let resume = Resume::starter();
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.education.len(), 1);
        assert!(resume.experience[0].company.is_empty());
        assert!(resume.education[0].school.is_empty());
        assert!(resume.summary.is_empty());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.profile, Profile::default());
    }

    #[test]
    fn test_with_profile_field_replaces_one_field() {
        let resume = Resume::default()
            .with_profile_field(ProfileField::Name, "Jane Doe")
            .with_profile_field(ProfileField::Email, "jane@example.com");

        assert_eq!(resume.profile.name, "Jane Doe");
        assert_eq!(resume.profile.email, "jane@example.com");
        assert!(resume.profile.title.is_empty());
        assert!(resume.profile.phone.is_empty());
    }

    #[test]
    fn test_operations_leave_input_untouched() {
        let original = Resume::starter();
        let copy = original.clone();

        let _ = original.with_summary("changed");
        let _ = original.with_new_entry(EntryKind::Experience);
        let _ = original.with_skills_from_text("A,B");

        assert_eq!(original, copy);
    }

    #[test]
    fn test_with_new_entry_appends_blank_with_fresh_id() {
        let resume = Resume::starter();
        let (next, id) = resume.with_new_entry(EntryKind::Experience);

        assert_eq!(next.experience.len(), resume.experience.len() + 1);
        let added = next.experience.last().unwrap();
        assert_eq!(added.id, id);
        assert!(added.company.is_empty());
        assert!(added.position.is_empty());
        assert!(added.description.is_empty());
        assert_ne!(added.id, next.experience[0].id);
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let resume = Resume::starter();
        let (next, id) = resume.with_new_entry(EntryKind::Experience);
        let restored = next.without_entry(EntryKind::Experience, id);

        assert_eq!(restored.experience, resume.experience);
    }

    #[test]
    fn test_with_entry_field_updates_matching_entry() {
        let resume = Resume::starter();
        let id = resume.experience[0].id;

        let next = resume.with_entry_field(
            id,
            EntryField::Experience(ExperienceField::Company),
            "Google",
        );

        assert_eq!(next.experience[0].company, "Google");
        assert!(next.experience[0].position.is_empty());
    }

    #[test]
    fn test_with_entry_field_unknown_id_is_noop() {
        let resume = Resume::starter();
        let next = resume.with_entry_field(
            EntryId::fresh(),
            EntryField::Education(EducationField::School),
            "Stanford University",
        );
        assert_eq!(next, resume);
    }

    #[test]
    fn test_without_entry_unknown_id_is_noop() {
        let resume = Resume::starter();
        let next = resume.without_entry(EntryKind::Education, EntryId::fresh());
        assert_eq!(next, resume);
    }

    #[test]
    fn test_skills_from_text_trims_and_drops_blanks() {
        let resume = Resume::default().with_skills_from_text("A, ,B,,C");
        assert_eq!(resume.skills, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_skills_from_empty_text() {
        let resume = Resume::default()
            .with_skills_from_text("Rust, Go")
            .with_skills_from_text("");
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_skills_keep_order_and_duplicates() {
        let resume = Resume::default().with_skills_from_text("Rust, SQL, Rust");
        assert_eq!(resume.skills, vec!["Rust", "SQL", "Rust"]);
        assert_eq!(resume.skills_text(), "Rust, SQL, Rust");
    }

    #[test]
    fn test_entry_id_fresh_among_avoids_existing() {
        let existing: Vec<EntryId> = (0..8).map(|_| EntryId::fresh()).collect();
        let id = EntryId::fresh_among(&existing);
        assert!(!existing.contains(&id));
    }

    #[test]
    fn test_entry_id_parse_roundtrip() {
        let id = EntryId::fresh();
        let parsed: EntryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_entry_id_parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<EntryId>().unwrap_err();
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[test]
    fn test_entry_field_kind() {
        assert_eq!(
            EntryField::Experience(ExperienceField::Company).kind(),
            EntryKind::Experience
        );
        assert_eq!(
            EntryField::Education(EducationField::Degree).kind(),
            EntryKind::Education
        );
    }

    #[test]
    fn test_resume_serialization() {
        let resume = Resume::starter()
            .with_profile_field(ProfileField::Name, "Jane Doe")
            .with_skills_from_text("Rust, SQL");
        let json = serde_json::to_string(&resume).unwrap();
        let parsed: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, resume);
    }
}

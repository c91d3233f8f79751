//! Editable sections and the active-section registry
//!
//! The section set is closed: five sections have editing forms, the rest
//! are placeholders the shell renders as "coming soon". Navigation is
//! unconditional between known sections and never terminates; unknown
//! section ids are normalized away rather than treated as errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One editable category of the resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Social,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 9] = [
        Section::Profile,
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Languages,
        Section::Social,
    ];

    /// Stable identifier used in snapshots and navigation
    pub fn id(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Languages => "languages",
            Section::Social => "social",
        }
    }

    /// Heading shown above the section's editing form
    pub fn title(self) -> &'static str {
        match self {
            Section::Profile => "Personal Information",
            Section::Summary => "Professional Summary",
            Section::Experience => "Work Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Languages => "Languages",
            Section::Social => "Social Links",
        }
    }

    /// Short label for the sidebar
    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Summary => "Summary",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Languages => "Languages",
            Section::Social => "Social Links",
        }
    }

    /// Whether an editing form exists for this section
    ///
    /// Sections without one are inert placeholders.
    pub fn has_form(self) -> bool {
        matches!(
            self,
            Section::Profile
                | Section::Summary
                | Section::Experience
                | Section::Education
                | Section::Skills
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error parsing a [`Section`] id
#[derive(Error, Debug)]
#[error("Unknown section id '{0}'")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Tracks which section the editor is showing
///
/// Starts on Profile. There is no terminal state; any known section can be
/// selected at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRegistry {
    active: Section,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            active: Section::Profile,
        }
    }
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Move to `section` unconditionally
    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    /// Move to the section named by `id`
    ///
    /// Unknown ids leave the active section unchanged and return false;
    /// the shell shows its fallback rendering instead of erroring.
    pub fn select_id(&mut self, id: &str) -> bool {
        match id.parse::<Section>() {
            Ok(section) => {
                self.active = section;
                true
            }
            Err(_) => {
                tracing::debug!(id, "ignoring unknown section id");
                false
            }
        }
    }
}

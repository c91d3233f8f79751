//! Layout projection
//!
//! [`render`] maps a resume document plus a style configuration to a
//! [`ResumeLayout`] — a pure value describing exactly what the page shows.
//! The projection is deterministic and total: it never fails on any
//! document, and every incomplete section degrades to "omitted" rather
//! than rendering placeholders (the header name and title are the only
//! fields with fallback text).
//!
//! The layout value is the handoff point for anything that displays or
//! exports the resume; it carries the resolved style along so a consumer
//! needs nothing else.

use serde::{Deserialize, Serialize};

use crate::models::{Education, Experience, Resume};
use crate::style::{FontFamily, StyleConfig};

/// Fallback header text when the profile is empty
const NAME_FALLBACK: &str = "Your Name";
const TITLE_FALLBACK: &str = "Your Job Title";

/// Which contact row a value belongs to (decides the glyph/icon)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
}

/// One contact row in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

/// The resume header: always present, with fallbacks for name and title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub title: String,
    /// Photo handle, only when the profile has one
    pub photo: Option<String>,
    /// Non-empty contact fields in email/phone/location/website order
    pub contacts: Vec<Contact>,
}

/// One listed experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    pub date_range: String,
    pub description: Option<String>,
}

/// One listed education entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    /// Degree, extended with "in {field}" when a field of study is set
    pub title: String,
    pub school: String,
    pub date_range: String,
}

/// A body section that made it into the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutSection {
    Summary { text: String },
    Experience { items: Vec<ExperienceItem> },
    Education { items: Vec<EducationItem> },
    Skills { chips: Vec<String> },
}

/// The rendered page description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeLayout {
    pub header: Header,
    /// Sections in page order; omitted sections are simply absent
    pub sections: Vec<LayoutSection>,
    /// Accent hex color for headings, chips, and the header rule
    pub accent: String,
    pub font_family: FontFamily,
    pub font_size: u8,
    pub line_spacing: f32,
}

/// Project a document and style configuration to a page layout
pub fn render(resume: &Resume, style: &StyleConfig) -> ResumeLayout {
    let mut sections = Vec::new();

    if !resume.summary.is_empty() {
        sections.push(LayoutSection::Summary {
            text: resume.summary.clone(),
        });
    }

    // Section shows only when some entry names a company; within it, an
    // entry is listed when it has a company or a position.
    if resume.experience.iter().any(|e| !e.company.is_empty()) {
        sections.push(LayoutSection::Experience {
            items: resume
                .experience
                .iter()
                .filter(|e| !e.company.is_empty() || !e.position.is_empty())
                .map(experience_item)
                .collect(),
        });
    }

    if resume.education.iter().any(|e| !e.school.is_empty()) {
        sections.push(LayoutSection::Education {
            items: resume
                .education
                .iter()
                .filter(|e| !e.school.is_empty() || !e.degree.is_empty())
                .map(education_item)
                .collect(),
        });
    }

    if !resume.skills.is_empty() {
        sections.push(LayoutSection::Skills {
            chips: resume.skills.clone(),
        });
    }

    ResumeLayout {
        header: header(resume),
        sections,
        accent: style.preset().primary.to_string(),
        font_family: style.font_family(),
        font_size: style.font_size(),
        line_spacing: style.line_spacing(),
    }
}

fn header(resume: &Resume) -> Header {
    let profile = &resume.profile;

    let mut contacts = Vec::new();
    for (kind, value) in [
        (ContactKind::Email, &profile.email),
        (ContactKind::Phone, &profile.phone),
        (ContactKind::Location, &profile.location),
        (ContactKind::Website, &profile.website),
    ] {
        if !value.is_empty() {
            contacts.push(Contact {
                kind,
                value: value.clone(),
            });
        }
    }

    Header {
        name: fallback(&profile.name, NAME_FALLBACK),
        title: fallback(&profile.title, TITLE_FALLBACK),
        photo: (!profile.image.is_empty()).then(|| profile.image.clone()),
        contacts,
    }
}

fn fallback(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn experience_item(entry: &Experience) -> ExperienceItem {
    // An open-ended position reads as "start - Present".
    let end = if entry.end_date.is_empty() {
        "Present"
    } else {
        &entry.end_date
    };
    ExperienceItem {
        position: entry.position.clone(),
        company: entry.company.clone(),
        date_range: format!("{} - {}", entry.start_date, end),
        description: (!entry.description.is_empty()).then(|| entry.description.clone()),
    }
}

fn education_item(entry: &Education) -> EducationItem {
    let title = if entry.field_of_study.is_empty() {
        entry.degree.clone()
    } else {
        format!("{} in {}", entry.degree, entry.field_of_study)
    };
    EducationItem {
        title,
        school: entry.school.clone(),
        // Education ranges are shown verbatim; no "Present" substitution.
        date_range: format!("{} - {}", entry.start_date, entry.end_date),
    }
}

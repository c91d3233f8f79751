//! Per-section form definitions
//!
//! Static field catalogs for the editable sections: the label shown next
//! to each input and the placeholder shown while it is empty. The app
//! routes edits to the document store based on which catalog entry has
//! focus.

use cvforge_core::{EducationField, ExperienceField, ProfileField};

/// Label and placeholder for one form input
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Profile form fields in display order
pub const PROFILE_FIELDS: [(ProfileField, FieldSpec); 6] = [
    (
        ProfileField::Name,
        FieldSpec { label: "Full Name", placeholder: "John Doe" },
    ),
    (
        ProfileField::Title,
        FieldSpec { label: "Job Title", placeholder: "Senior Software Engineer" },
    ),
    (
        ProfileField::Email,
        FieldSpec { label: "Email", placeholder: "john@example.com" },
    ),
    (
        ProfileField::Phone,
        FieldSpec { label: "Phone", placeholder: "+1 (555) 123-4567" },
    ),
    (
        ProfileField::Location,
        FieldSpec { label: "Location", placeholder: "San Francisco, CA" },
    ),
    (
        ProfileField::Website,
        FieldSpec { label: "Website", placeholder: "https://johndoe.com" },
    ),
];

/// Experience entry fields in display order
pub const EXPERIENCE_FIELDS: [(ExperienceField, FieldSpec); 5] = [
    (
        ExperienceField::Company,
        FieldSpec { label: "Company", placeholder: "Google" },
    ),
    (
        ExperienceField::Position,
        FieldSpec { label: "Position", placeholder: "Software Engineer" },
    ),
    (
        ExperienceField::StartDate,
        FieldSpec { label: "Start Date", placeholder: "Jan 2020" },
    ),
    (
        ExperienceField::EndDate,
        FieldSpec { label: "End Date", placeholder: "Present" },
    ),
    (
        ExperienceField::Description,
        FieldSpec {
            label: "Description",
            placeholder: "Describe your responsibilities and achievements...",
        },
    ),
];

/// Education entry fields in display order
pub const EDUCATION_FIELDS: [(EducationField, FieldSpec); 5] = [
    (
        EducationField::School,
        FieldSpec { label: "School", placeholder: "Stanford University" },
    ),
    (
        EducationField::Degree,
        FieldSpec { label: "Degree", placeholder: "Bachelor of Science" },
    ),
    (
        EducationField::FieldOfStudy,
        FieldSpec { label: "Field of Study", placeholder: "Computer Science" },
    ),
    (
        EducationField::StartDate,
        FieldSpec { label: "Start", placeholder: "2016" },
    ),
    (
        EducationField::EndDate,
        FieldSpec { label: "End", placeholder: "2020" },
    ),
];

pub const SUMMARY_SPEC: FieldSpec = FieldSpec {
    label: "Professional Summary",
    placeholder:
        "Write a brief summary of your professional background, key achievements, and career goals...",
};

pub const SKILLS_SPEC: FieldSpec = FieldSpec {
    label: "Skills (comma separated)",
    placeholder: "JavaScript, React, TypeScript, Node.js, Python...",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_forms_cover_every_field() {
        assert_eq!(PROFILE_FIELDS.len(), 6);
        assert_eq!(EXPERIENCE_FIELDS.len(), 5);
        assert_eq!(EDUCATION_FIELDS.len(), 5);
    }

    #[test]
    fn test_labels_are_unique_within_form() {
        let mut labels: Vec<&str> = PROFILE_FIELDS.iter().map(|(_, s)| s.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), PROFILE_FIELDS.len());
    }
}

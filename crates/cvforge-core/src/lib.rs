//! cvforge core library
//!
//! This crate provides the functional core of cvforge, an interactive
//! resume builder: the canonical document model, the style engine, and the
//! deterministic projection from document + style to a page layout.
//!
//! # Architecture
//!
//! Edits flow into [`DocumentStore`] mutations; each mutation produces a
//! new immutable [`Resume`] snapshot. [`render`] recomputes a
//! [`ResumeLayout`] from the latest snapshot and the active
//! [`StyleConfig`]; the shell displays that layout at the [`Preview`]'s
//! zoom. The [`SectionRegistry`] only gates which editing form is shown —
//! it never affects the projection.
//!
//! Everything is in-process value data: no I/O, no locking, no background
//! work. Documents live for one editing session.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = DocumentStore::new();
//! store.set_profile_field(ProfileField::Name, "Jane Doe");
//!
//! let style = StyleConfig::for_template("minimal");
//! let layout = render(store.snapshot(), &style);
//! ```
//!
//! # Modules
//!
//! - `models`: resume document types and pure update operations
//! - `store`: the owned state cell holding the current snapshot
//! - `style`: color/font catalog and clamped style configuration
//! - `sections`: editable-section set and active-section registry
//! - `render`: pure document + style -> layout projection
//! - `preview`: preview overlay visibility and zoom
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod preview;
pub mod render;
pub mod sections;
pub mod store;
pub mod style;

pub use config::Config;
pub use models::{
    Education, EducationField, EntryField, EntryId, EntryKind, Experience, ExperienceField,
    ParseEntryIdError, Profile, ProfileField, Resume,
};
pub use preview::Preview;
pub use render::{render, Contact, ContactKind, Header, LayoutSection, ResumeLayout};
pub use sections::{ParseSectionError, Section, SectionRegistry};
pub use store::DocumentStore;
pub use style::{ColorPreset, FontFamily, ParseFontError, StyleConfig, COLOR_PRESETS};

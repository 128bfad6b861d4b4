//! Curriculum reference data
//!
//! Fixed display-name tables owned by the curriculum side of the
//! platform. The search engine compares filter values against these
//! display forms, never against raw identifiers.

pub mod mapping;

pub use mapping::{level_display_name, subject_display_name};

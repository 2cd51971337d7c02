//! Fixed sample data shown by the prototype screens.
//!
//! Nothing here is computed. Headline figures such as the overall trait
//! score or the expected yield are literals, not aggregates of the series.

pub mod growth;
pub mod languages;
pub mod traits;

/// Crop variety every analysis screen talks about.
pub const SUBJECT: &str = "Maize Hybrid ZM-401";

pub const FEATURE_PILLS: &[&str] = &[
    "isiXhosa",
    "Kiswahili",
    "Nigerian Pidgin",
    "Portuguese",
    "Trait Scoring",
    "Growth Simulation",
];

//! Real-world asset registration: a four-step wizard over an
//! unvalidated form.

pub mod asset_id;
pub mod validation;
pub mod wizard;

pub use wizard::{Field, FormData, RegistrationWizard, WizardStep};

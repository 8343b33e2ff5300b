pub mod controller;
pub mod options;
pub mod step;

pub use controller::{GenerationOutcome, SessionState, WizardController, WizardError};
pub use options::{Theme, WebsiteOptions};
pub use step::Step;

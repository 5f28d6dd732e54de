pub mod extras;
pub mod orchestrator;
pub mod pricing;
pub mod wizard;

pub use orchestrator::{BookingOrchestrator, BookingOutcome};
pub use pricing::{FeeSchedule, PriceSummary};
pub use wizard::{BookingWizard, WizardError, WizardStep};

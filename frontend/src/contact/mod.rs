pub mod intake;
pub mod lead;

pub use intake::{send_lead, ContactIntake, IntakeAction, IntakeError, IntakeStatus};
pub use lead::{LeadField, RevenueBracket};

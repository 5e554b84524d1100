pub mod aggregate;
pub mod rules;

pub use aggregate::{CreateItemPayload, PatchItemPayload, RequisitionItem};
pub use rules::AdvisoryViolation;

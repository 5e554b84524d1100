pub mod aggregate;
pub mod status_policy;

pub use aggregate::{
    CreateRequisitionPayload, PatchRequisitionPayload, Requisition, RequisitionDetail,
    TransitionPayload, ENTITY_LABELS,
};
pub use status_policy::StatusPolicy;

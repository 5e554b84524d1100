pub mod dto;

pub use dto::RequisitionSummary;

pub mod requisition_status;

pub use requisition_status::RequisitionStatus;

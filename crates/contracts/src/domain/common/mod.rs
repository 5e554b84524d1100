//! Common types shared by all aggregates

pub mod api_error;
pub mod entity_labels;
pub mod http_response;

// Re-exports
pub use api_error::{ApiError, ApiResult};
pub use entity_labels::EntityLabels;
pub use http_response::{decode_failure, decode_response, is_success};

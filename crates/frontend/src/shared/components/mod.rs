pub mod api_error_alert;
pub mod date_input;
pub mod stat_card;
pub mod table;

pub use api_error_alert::ApiErrorAlert;
pub use date_input::DateInput;
pub use stat_card::{StatCard, StatTone};

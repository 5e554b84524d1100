pub mod aggregate;

pub use aggregate::{unit_name, UnitOfMeasure, ENTITY_LABELS};

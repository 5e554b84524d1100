pub mod aggregate;

pub use aggregate::{Nomenclature, ENTITY_LABELS};

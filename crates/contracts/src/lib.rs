//! Wire contracts between the requisition admin UI and the procurement API.
//!
//! Everything here is plain data plus pure functions so it can be unit-tested
//! on the host; the `frontend` crate only adds transport and views on top.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod system;
pub mod usecases;

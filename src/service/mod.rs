//! Business logic services for the registration core.
//!
//! Services coordinate repositories and own the business rules: flight-pair
//! resolution, assignment write validation, payload validation, and the
//! registration lifecycle. Controllers go through services for anything with
//! rules attached; plain CRUD may hit a repository directly.

pub mod assignment;
pub mod flight;
pub mod registration;
pub mod validator;

//! Domain types, error taxonomy, and form validation for the portfolio
//! backend. This crate performs no I/O; everything here is pure and unit
//! testable.

pub mod error;
pub mod types;
pub mod validation;

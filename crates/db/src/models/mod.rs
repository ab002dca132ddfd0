//! Entity structs matching database rows.
//!
//! Each struct derives `FromRow` + `Serialize` and is returned directly
//! from the repository layer. Write payloads are the typed form records
//! from `folio_core::validation::schemas`.

pub mod contact_message;
pub mod profile;
pub mod project;
pub mod skill;
pub mod testimonial;

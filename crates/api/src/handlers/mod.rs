//! HTTP handlers, grouped by resource.

pub mod auth;
pub mod health;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod public;
pub mod skills;
pub mod testimonials;
pub mod upload;

//! Authentication: static credential check and session tokens.

pub mod credentials;
pub mod jwt;

//! The admin credential check.
//!
//! A single static identity: the submitted pair is compared against the two
//! process-configured reference values. Anything other than an exact match
//! on both is `Unauthenticated` -- missing, mismatched, and malformed input
//! are deliberately indistinguishable so the response never leaks which
//! part was wrong.

use crate::config::AdminConfig;

/// Result of a credential check. There is exactly one identity, so a
/// successful check carries no further data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Unauthenticated,
}

/// Compare a submitted credential pair against the configured admin pair.
pub fn authenticate(email: &str, password: &str, admin: &AdminConfig) -> AuthOutcome {
    if email == admin.email && password == admin.password {
        AuthOutcome::Authenticated
    } else {
        AuthOutcome::Unauthenticated
    }
}

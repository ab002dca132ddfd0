//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Create/update methods take
//! the validated form records from `folio-core`; nothing here re-validates.

pub mod contact_message_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod skill_repo;
pub mod testimonial_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
pub use testimonial_repo::TestimonialRepo;

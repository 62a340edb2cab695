//! Spaces (Virtual Q&A Spaces) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and the archive scheduler
//! - `infra/` - Database implementations
//!
//! ## Features
//! - Tutors host virtual spaces; students join with an 8-character code
//! - Students post questions, tutors answer, replies carry likes
//! - AI difficulty rankings land asynchronously per post
//! - Expired spaces archive into immutable session records
//!
//! ## Archiving Model
//! - A timer-driven sweep finds active spaces past their end time
//! - Posts, participants and statistics snapshot into a session document
//! - Snapshots persist before the space status flips; an interrupted
//!   archive re-runs on the next sweep
//! - Archived sessions stay readable after the live rows change

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::ArchiveConfig;
pub use application::scheduler::{ArchiveScheduler, SweepReport};
pub use error::{SpaceError, SpaceResult};
pub use infra::postgres::PgSpaceRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod store {
    pub use crate::infra::postgres::PgSpaceRepository as SpaceStore;
}

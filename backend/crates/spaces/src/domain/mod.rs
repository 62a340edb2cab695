//! Domain Layer
//!
//! Contains entities, value objects, read models, repository traits, and
//! pure services.

pub mod entity;
pub mod read_model;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{post::Post, session::Session, space::VirtualSpace};
pub use repository::{PostRepository, SessionRepository, SpaceRepository};

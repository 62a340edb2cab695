//! Value Object Module

pub mod attachment;
pub mod difficulty;
pub mod join_code;
pub mod snapshot;
pub mod space_status;
pub mod user_ref;

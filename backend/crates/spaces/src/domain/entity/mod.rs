//! Entity Module

pub mod post;
pub mod session;
pub mod space;

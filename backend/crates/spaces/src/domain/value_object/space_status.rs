//! Space Status Value Object
//!
//! Lifecycle state of a virtual space.
//!
//! ## State machine
//! - `Active → Archived` via the archive operation (automatic sweep or manual)
//! - `Active → Expired` as an administrative terminal state
//! - Manual `Active ⇄ Archived` corrections are permitted via `update_status`
//! - Nothing transitions out of `Archived` automatically

use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual space lifecycle status
///
/// - **Active**: accepting joins and posts, visible to students
/// - **Archived**: frozen historical record exists, space is read-only
/// - **Expired**: administratively closed without an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum SpaceStatus {
    /// Live space - students can join and post
    #[default]
    Active = 0,

    /// Archived space - a session snapshot has been persisted
    Archived = 1,

    /// Expired space - closed administratively, no archive produced
    Expired = 2,
}

impl SpaceStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Expired => "expired",
        }
    }

    /// Check if students can join
    #[inline]
    pub const fn can_join(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if new posts are accepted
    #[inline]
    pub const fn can_accept_posts(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the normal archive transition applies
    #[inline]
    pub const fn can_archive(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if this is a terminal state (cannot transition out)
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Active),
            1 => Some(Self::Archived),
            2 => Some(Self::Expired),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(Self::Active),
            "archived" => Some(Self::Archived),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

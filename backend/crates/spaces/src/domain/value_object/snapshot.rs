//! Archived Snapshot Value Objects
//!
//! The self-contained JSON document persisted on a session when a space is
//! archived. Everything a reader needs is embedded by value: user identities
//! are resolved to [`UserRef`] at archive time, so the snapshot stays
//! readable even if live rows are later modified or deleted. None of these
//! types hold references back into live tables.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, SpaceId};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::attachment::Attachment;
use crate::domain::value_object::difficulty::DifficultyLevel;
use crate::domain::value_object::user_ref::UserRef;

/// Root of the archived document stored in `sessions.archived_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedSnapshot {
    pub space: ArchivedSpace,
    /// Posts ordered by difficulty score descending (creation order on ties)
    pub posts: Vec<ArchivedPost>,
}

/// Space metadata frozen at archive time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedSpace {
    pub space_id: SpaceId,
    pub name: String,
    pub description: Option<String>,
    pub join_code: String,
    pub tutor: UserRef,
    pub participants: Vec<UserRef>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// A post frozen at archive time, identities resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedPost {
    pub post_id: PostId,
    /// None for anonymous posts
    pub author: Option<UserRef>,
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub difficulty_level: DifficultyLevel,
    pub difficulty_score: i32,
    pub knowledge_points: Vec<String>,
    pub answer: Option<ArchivedAnswer>,
    pub replies: Vec<ArchivedReply>,
    pub created_at: DateTime<Utc>,
}

/// Tutor answer frozen at archive time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedAnswer {
    pub content: String,
    pub answered_by: UserRef,
    pub answered_at: DateTime<Utc>,
}

/// Reply frozen at archive time
///
/// Likes collapse to a count; the archive does not track who liked what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedReply {
    pub author: Option<UserRef>,
    pub content: String,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
}

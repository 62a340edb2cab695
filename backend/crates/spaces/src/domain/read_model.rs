//! Read Models
//!
//! Query-side shapes with user identities resolved to public refs.
//! Repositories return these for the flows that need display names
//! (space detail, post listings, archive listings); write paths work
//! with the entities directly.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, SessionId, SpaceId, UserId};
use uuid::Uuid;

use crate::domain::entity::session::SessionStatistics;
use crate::domain::entity::space::VirtualSpace;
use crate::domain::value_object::{
    attachment::Attachment, difficulty::DifficultyLevel, user_ref::UserRef,
};

/// A space with tutor and participants resolved
#[derive(Debug, Clone)]
pub struct SpaceDetail {
    pub space: VirtualSpace,
    pub tutor: UserRef,
    pub participants: Vec<UserRef>,
}

/// A post with author, answerer and reply authors resolved
#[derive(Debug, Clone)]
pub struct PostView {
    pub post_id: PostId,
    /// None for anonymous posts
    pub author: Option<UserRef>,
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub difficulty_level: DifficultyLevel,
    pub difficulty_score: i32,
    pub knowledge_points: Vec<String>,
    pub answer: Option<AnswerView>,
    pub replies: Vec<ReplyView>,
    pub created_at: DateTime<Utc>,
}

impl PostView {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

/// Tutor answer with the answerer resolved
#[derive(Debug, Clone)]
pub struct AnswerView {
    pub content: String,
    pub answered_by: UserRef,
    pub answered_at: DateTime<Utc>,
}

/// Reply with the author resolved; keeps the full like set for live views
#[derive(Debug, Clone)]
pub struct ReplyView {
    pub reply_id: Uuid,
    pub author: Option<UserRef>,
    pub content: String,
    pub likes: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Archive listing entry, served entirely from the sessions table
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub space_id: SpaceId,
    pub space_name: String,
    pub join_code: String,
    pub tutor_id: UserId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub statistics: SessionStatistics,
    pub archived_at: DateTime<Utc>,
}

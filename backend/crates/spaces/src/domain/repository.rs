//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, SessionId, SpaceId, UserId};
use uuid::Uuid;

use crate::domain::entity::post::{Post, Reply, TutorAnswer};
use crate::domain::entity::session::Session;
use crate::domain::entity::space::VirtualSpace;
use crate::domain::read_model::{PostView, SessionSummary, SpaceDetail};
use crate::domain::value_object::difficulty::DifficultyRanking;
use crate::domain::value_object::{join_code::JoinCode, space_status::SpaceStatus};
use crate::error::SpaceResult;

/// Space repository trait
#[trait_variant::make(SpaceRepository: Send)]
pub trait LocalSpaceRepository {
    /// Create a new space
    async fn create(&self, space: &VirtualSpace) -> SpaceResult<()>;

    /// Find space by ID
    async fn find_by_id(&self, space_id: &SpaceId) -> SpaceResult<Option<VirtualSpace>>;

    /// Find space by join code
    async fn find_by_code(&self, code: &JoinCode) -> SpaceResult<Option<VirtualSpace>>;

    /// Find space with tutor and participants resolved
    async fn find_detail(&self, space_id: &SpaceId) -> SpaceResult<Option<SpaceDetail>>;

    /// IDs of active spaces whose window has closed (ends_at <= now)
    async fn find_expired_active(&self, now: DateTime<Utc>) -> SpaceResult<Vec<SpaceId>>;

    /// Write the space status (idempotent)
    async fn update_status(&self, space_id: &SpaceId, status: SpaceStatus) -> SpaceResult<()>;

    /// Add a participant; returns false when already a member
    async fn add_participant(&self, space_id: &SpaceId, user_id: &UserId) -> SpaceResult<bool>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> SpaceResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> SpaceResult<Option<Post>>;

    /// Posts of a space with identities resolved, ordered by
    /// difficulty_score DESC then created_at ASC
    async fn find_by_space(&self, space_id: &SpaceId) -> SpaceResult<Vec<PostView>>;

    /// Record the tutor answer; all answer fields flip in one statement
    async fn answer(&self, post_id: &PostId, answer: &TutorAnswer) -> SpaceResult<()>;

    /// Record the AI-delivered ranking
    async fn set_ranking(&self, post_id: &PostId, ranking: &DifficultyRanking) -> SpaceResult<()>;

    /// Append a reply to the post's thread
    async fn add_reply(&self, post_id: &PostId, reply: &Reply) -> SpaceResult<()>;

    /// Toggle a user's like on a reply; returns the new liked state
    async fn toggle_reply_like(
        &self,
        post_id: &PostId,
        reply_id: Uuid,
        user_id: &UserId,
    ) -> SpaceResult<bool>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Find the session belonging to a space, if one exists yet
    async fn find_by_space(&self, space_id: &SpaceId) -> SpaceResult<Option<Session>>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: &SessionId) -> SpaceResult<Option<Session>>;

    /// Insert or update the session, keyed on space_id
    async fn upsert(&self, session: &Session) -> SpaceResult<()>;

    /// Archived sessions, newest archived_at first, optionally per tutor
    async fn list_archived(&self, tutor_id: Option<&UserId>) -> SpaceResult<Vec<SessionSummary>>;
}

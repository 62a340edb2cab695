//! Session Entity
//!
//! The frozen historical record of a space. One session exists per space
//! at most; it is created lazily on first archive and reused by a forced
//! re-archive. Space metadata is denormalized here so archive listings
//! never touch the live tables.

use chrono::{DateTime, Utc};
use kernel::id::{SessionId, SpaceId, UserId};

use crate::domain::entity::space::VirtualSpace;
use crate::domain::value_object::snapshot::ArchivedSnapshot;

/// Aggregate statistics computed at archive time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStatistics {
    pub total_posts: i32,
    pub answered_posts: i32,
    pub unanswered_posts: i32,
    pub participant_count: i32,
    /// Arithmetic mean of difficulty scores, 0.0 when there are no posts
    pub average_difficulty_score: f64,
}

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub space_id: SpaceId,
    /// Denormalized from the space at archive time
    pub space_name: String,
    pub join_code: String,
    pub tutor_id: UserId,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub statistics: SessionStatistics,
    /// The immutable snapshot; present once archived
    pub archived_data: Option<ArchivedSnapshot>,
    pub is_archived: bool,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh, not-yet-archived session mirroring a space
    pub fn for_space(space: &VirtualSpace) -> Self {
        let now = Utc::now();
        Self {
            session_id: SessionId::new(),
            space_id: space.space_id,
            space_name: space.name.clone(),
            join_code: space.join_code.as_str().to_string(),
            tutor_id: space.tutor_id,
            starts_at: space.starts_at,
            ends_at: space.ends_at,
            statistics: SessionStatistics::default(),
            archived_data: None,
            is_archived: false,
            archived_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store the archive result
    ///
    /// Statistics, snapshot, flag and timestamp move together so a session
    /// can never claim to be archived without its payload.
    pub fn record_archive(&mut self, statistics: SessionStatistics, snapshot: ArchivedSnapshot) {
        let now = Utc::now();
        self.statistics = statistics;
        self.archived_data = Some(snapshot);
        self.is_archived = true;
        self.archived_at = Some(now);
        self.updated_at = now;
    }
}

//! VirtualSpace Entity
//!
//! A tutor-created, time-bounded Q&A room that students join via code/QR.

use chrono::{DateTime, Utc};
use kernel::id::{SpaceId, UserId};

use crate::domain::value_object::{join_code::JoinCode, space_status::SpaceStatus};

/// Virtual space entity
///
/// The participant set lives in its own table and is surfaced through the
/// `SpaceDetail` read model, not here.
#[derive(Debug, Clone)]
pub struct VirtualSpace {
    pub space_id: SpaceId,
    /// Unique code students use to join
    pub join_code: JoinCode,
    /// Owning tutor
    pub tutor_id: UserId,
    pub name: String,
    pub description: Option<String>,
    /// Scheduled start of the active window
    pub starts_at: DateTime<Utc>,
    /// End of the active window; the sweep archives past this point
    pub ends_at: DateTime<Utc>,
    pub status: SpaceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VirtualSpace {
    /// Create a new active space with a fresh join code
    pub fn new(
        tutor_id: UserId,
        name: String,
        description: Option<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            space_id: SpaceId::new(),
            join_code: JoinCode::generate(),
            tutor_id,
            name,
            description,
            starts_at,
            ends_at,
            status: SpaceStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the sweep should pick this space up
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == SpaceStatus::Active && self.ends_at <= now
    }

    /// Check if students can join
    pub fn can_join(&self) -> bool {
        self.status.can_join()
    }

    /// Check if new posts are accepted
    pub fn can_accept_posts(&self) -> bool {
        self.status.can_accept_posts()
    }

    /// Update status
    pub fn set_status(&mut self, status: SpaceStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

//! Archive Space Use Case
//!
//! Freezes one space into its session record: resolves the space detail
//! and posts, computes statistics, builds the self-contained snapshot,
//! persists the session, then flips the space status.
//!
//! The snapshot is written durably before the status change, so a crash
//! between the two steps leaves the space active and the operation safe
//! to retry: the archived check keys off space status, not session state.

use std::sync::Arc;

use crate::domain::entity::session::{Session, SessionStatistics};
use crate::domain::repository::{PostRepository, SessionRepository, SpaceRepository};
use crate::domain::services;
use crate::domain::value_object::space_status::SpaceStatus;
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{SessionId, SpaceId, UserId};

/// Archive space input
pub struct ArchiveSpaceInput {
    pub space_id: SpaceId,
    /// Who triggered the archive; None for the automatic sweep
    pub actor_id: Option<UserId>,
    /// Re-archive an already-archived space, overwriting its snapshot
    pub force: bool,
}

/// Archive space output
pub struct ArchiveSpaceOutput {
    pub session_id: SessionId,
    pub statistics: SessionStatistics,
}

/// Archive space use case
pub struct ArchiveSpaceUseCase<S, P, N>
where
    S: SpaceRepository,
    P: PostRepository,
    N: SessionRepository,
{
    space_repo: Arc<S>,
    post_repo: Arc<P>,
    session_repo: Arc<N>,
}

impl<S, P, N> ArchiveSpaceUseCase<S, P, N>
where
    S: SpaceRepository,
    P: PostRepository,
    N: SessionRepository,
{
    pub fn new(space_repo: Arc<S>, post_repo: Arc<P>, session_repo: Arc<N>) -> Self {
        Self {
            space_repo,
            post_repo,
            session_repo,
        }
    }

    pub async fn execute(&self, input: ArchiveSpaceInput) -> SpaceResult<ArchiveSpaceOutput> {
        let detail = self
            .space_repo
            .find_detail(&input.space_id)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        match detail.space.status {
            SpaceStatus::Active => {}
            SpaceStatus::Archived if input.force => {
                tracing::info!(space_id = %input.space_id, "Re-archiving by force");
            }
            SpaceStatus::Archived => return Err(SpaceError::AlreadyArchived),
            SpaceStatus::Expired => return Err(SpaceError::SpaceNotActive),
        }

        // Posts arrive sorted by difficulty score; the snapshot keeps that order
        let posts = self.post_repo.find_by_space(&input.space_id).await?;

        let mut session = match self.session_repo.find_by_space(&input.space_id).await? {
            Some(existing) => existing,
            None => Session::for_space(&detail.space),
        };

        let statistics = services::compute_statistics(&posts, detail.participants.len());
        let snapshot = services::build_snapshot(&detail, &posts);

        // Snapshot lands before the status flip; a crash in between retries cleanly
        session.record_archive(statistics.clone(), snapshot);
        self.session_repo.upsert(&session).await?;

        self.space_repo
            .update_status(&input.space_id, SpaceStatus::Archived)
            .await?;

        tracing::info!(
            space_id = %input.space_id,
            session_id = %session.session_id,
            total_posts = statistics.total_posts,
            answered_posts = statistics.answered_posts,
            participant_count = statistics.participant_count,
            forced = input.force,
            manual = input.actor_id.is_some(),
            "Space archived"
        );

        Ok(ArchiveSpaceOutput {
            session_id: session.session_id,
            statistics,
        })
    }
}

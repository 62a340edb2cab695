//! Archived Space Detail Use Case
//!
//! Serves one session's full snapshot. A session that exists but has not
//! been archived yet is reported as absent.

use std::sync::Arc;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{SpaceError, SpaceResult};
use kernel::id::SessionId;

/// Archived space detail input
pub struct ArchivedSpaceDetailInput {
    pub session_id: SessionId,
}

/// Archived space detail output
pub struct ArchivedSpaceDetailOutput {
    /// The session including its archived snapshot
    pub session: Session,
}

/// Archived space detail use case
pub struct ArchivedSpaceDetailUseCase<N>
where
    N: SessionRepository,
{
    session_repo: Arc<N>,
}

impl<N> ArchivedSpaceDetailUseCase<N>
where
    N: SessionRepository,
{
    pub fn new(session_repo: Arc<N>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(
        &self,
        input: ArchivedSpaceDetailInput,
    ) -> SpaceResult<ArchivedSpaceDetailOutput> {
        let session = self
            .session_repo
            .find_by_id(&input.session_id)
            .await?
            .ok_or(SpaceError::SessionNotFound)?;

        if !session.is_archived {
            return Err(SpaceError::SessionNotFound);
        }

        Ok(ArchivedSpaceDetailOutput { session })
    }
}

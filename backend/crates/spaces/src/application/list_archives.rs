//! List Archived Spaces Use Case
//!
//! Archive listings come entirely from the sessions table; the live
//! space and post tables are never touched.

use std::sync::Arc;

use crate::domain::read_model::SessionSummary;
use crate::domain::repository::SessionRepository;
use crate::error::SpaceResult;
use kernel::id::UserId;

/// List archived spaces input
pub struct ListArchivedSpacesInput {
    /// Restrict to one tutor's spaces; None lists everything
    pub tutor_id: Option<UserId>,
}

/// List archived spaces output
pub struct ListArchivedSpacesOutput {
    /// Newest archived_at first
    pub sessions: Vec<SessionSummary>,
}

/// List archived spaces use case
pub struct ListArchivedSpacesUseCase<N>
where
    N: SessionRepository,
{
    session_repo: Arc<N>,
}

impl<N> ListArchivedSpacesUseCase<N>
where
    N: SessionRepository,
{
    pub fn new(session_repo: Arc<N>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(
        &self,
        input: ListArchivedSpacesInput,
    ) -> SpaceResult<ListArchivedSpacesOutput> {
        let sessions = self
            .session_repo
            .list_archived(input.tutor_id.as_ref())
            .await?;

        Ok(ListArchivedSpacesOutput { sessions })
    }
}

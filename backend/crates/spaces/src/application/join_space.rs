//! Join Space Use Case
//!
//! A student enters a space by typing (or scanning) its join code.

use std::sync::Arc;

use crate::domain::repository::SpaceRepository;
use crate::domain::value_object::join_code::JoinCode;
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{SpaceId, UserId};

/// Join space input
pub struct JoinSpaceInput {
    pub code: String,
    pub user_id: UserId,
}

/// Join space output
pub struct JoinSpaceOutput {
    pub space_id: SpaceId,
    pub space_name: String,
    /// False when the user was already a participant
    pub newly_joined: bool,
}

/// Join space use case
pub struct JoinSpaceUseCase<S>
where
    S: SpaceRepository,
{
    space_repo: Arc<S>,
}

impl<S> JoinSpaceUseCase<S>
where
    S: SpaceRepository,
{
    pub fn new(space_repo: Arc<S>) -> Self {
        Self { space_repo }
    }

    pub async fn execute(&self, input: JoinSpaceInput) -> SpaceResult<JoinSpaceOutput> {
        let code = JoinCode::parse_str(&input.code)
            .map_err(|e| SpaceError::InvalidJoinCode(e.message().to_string()))?;

        let space = self
            .space_repo
            .find_by_code(&code)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        if !space.can_join() {
            return Err(SpaceError::SpaceNotActive);
        }

        let newly_joined = self
            .space_repo
            .add_participant(&space.space_id, &input.user_id)
            .await?;

        if newly_joined {
            tracing::info!(
                space_id = %space.space_id,
                user_id = %input.user_id,
                "Participant joined space"
            );
        }

        Ok(JoinSpaceOutput {
            space_id: space.space_id,
            space_name: space.name,
            newly_joined,
        })
    }
}

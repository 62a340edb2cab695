//! Create Space Use Case
//!
//! A tutor opens a new virtual space for an upcoming session.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entity::space::VirtualSpace;
use crate::domain::repository::SpaceRepository;
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{SpaceId, UserId};

/// Create space input
pub struct CreateSpaceInput {
    pub tutor_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Create space output
pub struct CreateSpaceOutput {
    pub space_id: SpaceId,
    /// The generated code the tutor shares with students
    pub join_code: String,
}

/// Create space use case
pub struct CreateSpaceUseCase<S>
where
    S: SpaceRepository,
{
    space_repo: Arc<S>,
}

impl<S> CreateSpaceUseCase<S>
where
    S: SpaceRepository,
{
    pub fn new(space_repo: Arc<S>) -> Self {
        Self { space_repo }
    }

    pub async fn execute(&self, input: CreateSpaceInput) -> SpaceResult<CreateSpaceOutput> {
        if input.ends_at <= input.starts_at {
            return Err(SpaceError::InvalidWindow(format!(
                "ends_at {} is not after starts_at {}",
                input.ends_at, input.starts_at
            )));
        }

        let space = VirtualSpace::new(
            input.tutor_id,
            input.name,
            input.description,
            input.starts_at,
            input.ends_at,
        );

        self.space_repo.create(&space).await?;

        tracing::info!(
            space_id = %space.space_id,
            tutor_id = %space.tutor_id,
            join_code = %space.join_code,
            ends_at = %space.ends_at,
            "Space created"
        );

        Ok(CreateSpaceOutput {
            space_id: space.space_id,
            join_code: space.join_code.as_str().to_string(),
        })
    }
}

//! Record Ranking Use Case
//!
//! Writes the AI-computed difficulty for a post. This is the landing
//! point for the asynchronous enrichment: callers treat failures as
//! best-effort and the post keeps its unranked defaults.

use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::domain::value_object::difficulty::{DifficultyLevel, DifficultyRanking};
use crate::error::{SpaceError, SpaceResult};
use kernel::id::PostId;

/// Record ranking input
pub struct RecordRankingInput {
    pub post_id: PostId,
    pub level: DifficultyLevel,
    /// Must be within 0..=100
    pub score: i32,
    pub knowledge_points: Vec<String>,
}

/// Record ranking use case
pub struct RecordRankingUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> RecordRankingUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: RecordRankingInput) -> SpaceResult<()> {
        let ranking =
            DifficultyRanking::new(input.level, input.score, input.knowledge_points)
                .ok_or(SpaceError::InvalidScore(input.score))?;

        self.post_repo.set_ranking(&input.post_id, &ranking).await?;

        tracing::debug!(
            post_id = %input.post_id,
            level = %ranking.level,
            score = ranking.score,
            "Difficulty ranking recorded"
        );

        Ok(())
    }
}

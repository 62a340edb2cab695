//! Answer Post Use Case
//!
//! A tutor answers a question. Response text, answerer identity and
//! timestamp land together; a post can never be half-answered.
//!
//! Answering stays possible after the space expires so tutors can catch
//! up on open questions; a forced re-archive folds late answers into the
//! session snapshot.

use std::sync::Arc;

use crate::domain::entity::post::TutorAnswer;
use crate::domain::repository::PostRepository;
use crate::error::SpaceResult;
use kernel::id::{PostId, UserId};

/// Answer post input
pub struct AnswerPostInput {
    pub post_id: PostId,
    pub tutor_id: UserId,
    pub content: String,
}

/// Answer post use case
pub struct AnswerPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> AnswerPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: AnswerPostInput) -> SpaceResult<()> {
        let answer = TutorAnswer::new(input.tutor_id, input.content);

        self.post_repo.answer(&input.post_id, &answer).await?;

        tracing::info!(
            post_id = %input.post_id,
            tutor_id = %input.tutor_id,
            "Post answered"
        );

        Ok(())
    }
}

//! Reply Use Cases
//!
//! Threaded replies under a post and per-user reply likes. Both mutate
//! the reply document embedded in the post row, so they stay atomic per
//! post. Replies are only accepted while the space is active.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::post::Reply;
use crate::domain::repository::{PostRepository, SpaceRepository};
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{PostId, UserId};

/// Add reply input
pub struct AddReplyInput {
    pub post_id: PostId,
    /// None replies anonymously
    pub author_id: Option<UserId>,
    pub content: String,
}

/// Add reply output
pub struct AddReplyOutput {
    pub reply_id: Uuid,
}

/// Add reply use case
pub struct AddReplyUseCase<S, P>
where
    S: SpaceRepository,
    P: PostRepository,
{
    space_repo: Arc<S>,
    post_repo: Arc<P>,
}

impl<S, P> AddReplyUseCase<S, P>
where
    S: SpaceRepository,
    P: PostRepository,
{
    pub fn new(space_repo: Arc<S>, post_repo: Arc<P>) -> Self {
        Self {
            space_repo,
            post_repo,
        }
    }

    pub async fn execute(&self, input: AddReplyInput) -> SpaceResult<AddReplyOutput> {
        let post = self
            .post_repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(SpaceError::PostNotFound)?;

        let space = self
            .space_repo
            .find_by_id(&post.space_id)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        if !space.can_accept_posts() {
            return Err(SpaceError::SpaceNotActive);
        }

        let reply = Reply::new(input.author_id, input.content);
        self.post_repo.add_reply(&input.post_id, &reply).await?;

        tracing::info!(
            post_id = %input.post_id,
            reply_id = %reply.reply_id,
            "Reply added"
        );

        Ok(AddReplyOutput {
            reply_id: reply.reply_id,
        })
    }
}

/// Toggle reply like input
pub struct ToggleReplyLikeInput {
    pub post_id: PostId,
    pub reply_id: Uuid,
    pub user_id: UserId,
}

/// Toggle reply like output
pub struct ToggleReplyLikeOutput {
    /// The user's like state after the toggle
    pub liked: bool,
}

/// Toggle reply like use case
pub struct ToggleReplyLikeUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ToggleReplyLikeUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: ToggleReplyLikeInput) -> SpaceResult<ToggleReplyLikeOutput> {
        let liked = self
            .post_repo
            .toggle_reply_like(&input.post_id, input.reply_id, &input.user_id)
            .await?;

        tracing::debug!(
            post_id = %input.post_id,
            reply_id = %input.reply_id,
            liked,
            "Reply like toggled"
        );

        Ok(ToggleReplyLikeOutput { liked })
    }
}

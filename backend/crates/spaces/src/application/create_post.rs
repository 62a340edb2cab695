//! Create Post Use Case
//!
//! A student posts a question into an active space. Posts start unranked;
//! the difficulty ranking arrives later through `RecordRankingUseCase`.

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::{PostRepository, SpaceRepository};
use crate::domain::value_object::attachment::Attachment;
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{PostId, SpaceId, UserId};

/// Create post input
pub struct CreatePostInput {
    pub space_id: SpaceId,
    /// None posts anonymously
    pub author_id: Option<UserId>,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

/// Create post output
pub struct CreatePostOutput {
    pub post_id: PostId,
}

/// Create post use case
pub struct CreatePostUseCase<S, P>
where
    S: SpaceRepository,
    P: PostRepository,
{
    space_repo: Arc<S>,
    post_repo: Arc<P>,
}

impl<S, P> CreatePostUseCase<S, P>
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

    pub async fn execute(&self, input: CreatePostInput) -> SpaceResult<CreatePostOutput> {
        let space = self
            .space_repo
            .find_by_id(&input.space_id)
            .await?
            .ok_or(SpaceError::SpaceNotFound)?;

        if !space.can_accept_posts() {
            return Err(SpaceError::SpaceNotActive);
        }

        let post = Post::new(
            input.space_id,
            input.author_id,
            input.content,
            input.attachments,
        );

        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            space_id = %post.space_id,
            anonymous = post.author_id.is_none(),
            "Post created"
        );

        Ok(CreatePostOutput {
            post_id: post.post_id,
        })
    }
}

//! Application Layer
//!
//! Use cases, the archiving scheduler, and configuration.

pub mod answer_post;
pub mod archive_detail;
pub mod archive_space;
pub mod config;
pub mod create_post;
pub mod create_space;
pub mod join_space;
pub mod list_archives;
pub mod rank_post;
pub mod reply_post;
pub mod scheduler;

// Re-exports
pub use answer_post::{AnswerPostInput, AnswerPostUseCase};
pub use archive_detail::{
    ArchivedSpaceDetailInput, ArchivedSpaceDetailOutput, ArchivedSpaceDetailUseCase,
};
pub use archive_space::{ArchiveSpaceInput, ArchiveSpaceOutput, ArchiveSpaceUseCase};
pub use config::ArchiveConfig;
pub use create_post::{CreatePostInput, CreatePostOutput, CreatePostUseCase};
pub use create_space::{CreateSpaceInput, CreateSpaceOutput, CreateSpaceUseCase};
pub use join_space::{JoinSpaceInput, JoinSpaceOutput, JoinSpaceUseCase};
pub use list_archives::{
    ListArchivedSpacesInput, ListArchivedSpacesOutput, ListArchivedSpacesUseCase,
};
pub use rank_post::{RecordRankingInput, RecordRankingUseCase};
pub use reply_post::{
    AddReplyInput, AddReplyOutput, AddReplyUseCase, ToggleReplyLikeInput, ToggleReplyLikeOutput,
    ToggleReplyLikeUseCase,
};
pub use scheduler::{ArchiveScheduler, SweepReport};

//! Domain Services
//!
//! Pure functions for archive statistics and snapshot assembly.
//! No I/O happens here; the archive use case feeds in resolved read
//! models and persists whatever comes back.

use crate::domain::entity::session::SessionStatistics;
use crate::domain::read_model::{PostView, SpaceDetail};
use crate::domain::value_object::snapshot::{
    ArchivedAnswer, ArchivedPost, ArchivedReply, ArchivedSnapshot, ArchivedSpace,
};

/// Compute session statistics over a space's posts
///
/// Unranked posts count with their score of 0; the average reflects
/// whatever the ranking service has delivered so far.
pub fn compute_statistics(posts: &[PostView], participant_count: usize) -> SessionStatistics {
    let total = posts.len();
    let answered = posts.iter().filter(|p| p.is_answered()).count();

    let average = if total == 0 {
        0.0
    } else {
        let sum: i64 = posts.iter().map(|p| p.difficulty_score as i64).sum();
        sum as f64 / total as f64
    };

    SessionStatistics {
        total_posts: total as i32,
        answered_posts: answered as i32,
        unanswered_posts: (total - answered) as i32,
        participant_count: participant_count as i32,
        average_difficulty_score: average,
    }
}

/// Assemble the self-contained archive document
///
/// Input order is preserved, so posts arrive already sorted by score.
pub fn build_snapshot(detail: &SpaceDetail, posts: &[PostView]) -> ArchivedSnapshot {
    ArchivedSnapshot {
        space: ArchivedSpace {
            space_id: detail.space.space_id,
            name: detail.space.name.clone(),
            description: detail.space.description.clone(),
            join_code: detail.space.join_code.as_str().to_string(),
            tutor: detail.tutor.clone(),
            participants: detail.participants.clone(),
            starts_at: detail.space.starts_at,
            ends_at: detail.space.ends_at,
        },
        posts: posts.iter().map(archive_post).collect(),
    }
}

fn archive_post(post: &PostView) -> ArchivedPost {
    ArchivedPost {
        post_id: post.post_id,
        author: post.author.clone(),
        content: post.content.clone(),
        attachments: post.attachments.clone(),
        difficulty_level: post.difficulty_level,
        difficulty_score: post.difficulty_score,
        knowledge_points: post.knowledge_points.clone(),
        answer: post.answer.as_ref().map(|a| ArchivedAnswer {
            content: a.content.clone(),
            answered_by: a.answered_by.clone(),
            answered_at: a.answered_at,
        }),
        replies: post
            .replies
            .iter()
            .map(|r| ArchivedReply {
                author: r.author.clone(),
                content: r.content.clone(),
                like_count: r.likes.len() as u32,
                created_at: r.created_at,
            })
            .collect(),
        created_at: post.created_at,
    }
}

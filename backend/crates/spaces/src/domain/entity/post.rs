//! Post Entity
//!
//! A student question inside a space, with optional tutor answer,
//! AI-derived difficulty ranking, and threaded replies.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, SpaceId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_object::{
    attachment::Attachment,
    difficulty::{DifficultyLevel, DifficultyRanking},
};

/// Post entity
///
/// The answered state is structural: a post is answered exactly when
/// `answer` is `Some`, so response text, answerer and timestamp can never
/// be set partially.
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub space_id: SpaceId,
    /// None for anonymous posts
    pub author_id: Option<UserId>,
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub difficulty_level: DifficultyLevel,
    /// 0 until the ranking service delivers, and forever if it never does
    pub difficulty_score: i32,
    pub knowledge_points: Vec<String>,
    pub answer: Option<TutorAnswer>,
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unranked, unanswered post
    pub fn new(
        space_id: SpaceId,
        author_id: Option<UserId>,
        content: String,
        attachments: Vec<Attachment>,
    ) -> Self {
        let now = Utc::now();
        Self {
            post_id: PostId::new(),
            space_id,
            author_id,
            content,
            attachments,
            difficulty_level: DifficultyLevel::default(),
            difficulty_score: 0,
            knowledge_points: Vec::new(),
            answer: None,
            replies: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a tutor has answered
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Record the tutor answer
    pub fn record_answer(&mut self, answer: TutorAnswer) {
        self.answer = Some(answer);
        self.updated_at = Utc::now();
    }

    /// Apply an AI-delivered difficulty ranking
    pub fn apply_ranking(&mut self, ranking: DifficultyRanking) {
        self.difficulty_level = ranking.level;
        self.difficulty_score = ranking.score;
        self.knowledge_points = ranking.knowledge_points;
        self.updated_at = Utc::now();
    }

    /// Append a reply to the thread
    pub fn add_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
        self.updated_at = Utc::now();
    }
}

/// Tutor answer
///
/// All three fields travel together; storage writes them in one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorAnswer {
    pub content: String,
    pub answered_by: UserId,
    pub answered_at: DateTime<Utc>,
}

impl TutorAnswer {
    pub fn new(answered_by: UserId, content: String) -> Self {
        Self {
            content,
            answered_by,
            answered_at: Utc::now(),
        }
    }
}

/// Threaded reply on a post
///
/// Stored embedded in the post row as a JSON array, mirroring the per-post
/// atomicity of the reply thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub reply_id: Uuid,
    /// None for anonymous replies
    pub author_id: Option<UserId>,
    pub content: String,
    /// Users who currently like this reply
    pub likes: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(author_id: Option<UserId>, content: String) -> Self {
        Self {
            reply_id: Uuid::new_v4(),
            author_id,
            content,
            likes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add or remove a like; returns the new liked state
    pub fn toggle_like(&mut self, user_id: UserId) -> bool {
        if let Some(pos) = self.likes.iter().position(|u| *u == user_id) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user_id);
            true
        }
    }

    pub fn like_count(&self) -> u32 {
        self.likes.len() as u32
    }
}

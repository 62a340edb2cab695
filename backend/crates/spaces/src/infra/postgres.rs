//! PostgreSQL Repository Implementations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::post::{Post, Reply, TutorAnswer};
use crate::domain::entity::session::{Session, SessionStatistics};
use crate::domain::entity::space::VirtualSpace;
use crate::domain::read_model::{AnswerView, PostView, ReplyView, SessionSummary, SpaceDetail};
use crate::domain::repository::{PostRepository, SessionRepository, SpaceRepository};
use crate::domain::value_object::{
    attachment::Attachment, difficulty::DifficultyLevel, difficulty::DifficultyRanking,
    join_code::JoinCode, snapshot::ArchivedSnapshot, space_status::SpaceStatus, user_ref::UserRef,
};
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{PostId, SessionId, SpaceId, UserId};

/// Shown when a user row has disappeared from the profile projection
const UNKNOWN_USER: &str = "Unknown";

/// PostgreSQL-backed spaces repository
#[derive(Clone)]
pub struct PgSpaceRepository {
    pool: PgPool,
}

impl PgSpaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn user_ref(&self, user_id: &UserId) -> SpaceResult<Option<UserRef>> {
        let row = sqlx::query_as::<_, UserRefRow>(
            "SELECT user_id, display_name FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRefRow::into_ref))
    }

    async fn display_names(&self, ids: &[Uuid]) -> SpaceResult<HashMap<Uuid, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, UserRefRow>(
            "SELECT user_id, display_name FROM users WHERE user_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.user_id, r.display_name))
            .collect())
    }
}

// ============================================================================
// Space Repository Implementation
// ============================================================================

impl SpaceRepository for PgSpaceRepository {
    async fn create(&self, space: &VirtualSpace) -> SpaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO spaces (
                space_id,
                join_code,
                tutor_id,
                name,
                description,
                starts_at,
                ends_at,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(space.space_id.as_uuid())
        .bind(space.join_code.as_str())
        .bind(space.tutor_id.as_uuid())
        .bind(&space.name)
        .bind(&space.description)
        .bind(space.starts_at)
        .bind(space.ends_at)
        .bind(space.status.id())
        .bind(space.created_at)
        .bind(space.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> SpaceResult<Option<VirtualSpace>> {
        let row = sqlx::query_as::<_, SpaceRow>(
            r#"
            SELECT
                space_id,
                join_code,
                tutor_id,
                name,
                description,
                starts_at,
                ends_at,
                status,
                created_at,
                updated_at
            FROM spaces
            WHERE space_id = $1
            "#,
        )
        .bind(space_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_space()))
    }

    async fn find_by_code(&self, code: &JoinCode) -> SpaceResult<Option<VirtualSpace>> {
        let row = sqlx::query_as::<_, SpaceRow>(
            r#"
            SELECT
                space_id,
                join_code,
                tutor_id,
                name,
                description,
                starts_at,
                ends_at,
                status,
                created_at,
                updated_at
            FROM spaces
            WHERE join_code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_space()))
    }

    async fn find_detail(&self, space_id: &SpaceId) -> SpaceResult<Option<SpaceDetail>> {
        let Some(space) = SpaceRepository::find_by_id(self, space_id).await? else {
            return Ok(None);
        };

        let tutor = self
            .user_ref(&space.tutor_id)
            .await?
            .unwrap_or_else(|| UserRef::new(space.tutor_id, UNKNOWN_USER));

        let participants = sqlx::query_as::<_, UserRefRow>(
            r#"
            SELECT u.user_id, u.display_name
            FROM space_participants sp
            JOIN users u ON u.user_id = sp.user_id
            WHERE sp.space_id = $1
            ORDER BY sp.joined_at
            "#,
        )
        .bind(space_id.as_uuid())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(UserRefRow::into_ref)
        .collect();

        Ok(Some(SpaceDetail {
            space,
            tutor,
            participants,
        }))
    }

    async fn find_expired_active(&self, now: DateTime<Utc>) -> SpaceResult<Vec<SpaceId>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT space_id FROM spaces WHERE status = $1 AND ends_at <= $2 ORDER BY ends_at",
        )
        .bind(SpaceStatus::Active.id())
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(SpaceId::from_uuid).collect())
    }

    async fn update_status(&self, space_id: &SpaceId, status: SpaceStatus) -> SpaceResult<()> {
        let updated =
            sqlx::query("UPDATE spaces SET status = $2, updated_at = $3 WHERE space_id = $1")
                .bind(space_id.as_uuid())
                .bind(status.id())
                .bind(Utc::now())
                .execute(&self.pool)
                .await?
                .rows_affected();

        if updated == 0 {
            return Err(SpaceError::SpaceNotFound);
        }

        Ok(())
    }

    async fn add_participant(&self, space_id: &SpaceId, user_id: &UserId) -> SpaceResult<bool> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO space_participants (space_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (space_id, user_id) DO NOTHING
            "#,
        )
        .bind(space_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted == 1)
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgSpaceRepository {
    async fn create(&self, post: &Post) -> SpaceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                space_id,
                author_id,
                content,
                attachments,
                difficulty_level,
                difficulty_score,
                knowledge_points,
                response_content,
                answered_by,
                answered_at,
                is_answered,
                replies,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.space_id.as_uuid())
        .bind(post.author_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&post.content)
        .bind(Json(&post.attachments))
        .bind(post.difficulty_level.id())
        .bind(post.difficulty_score)
        .bind(&post.knowledge_points)
        .bind(post.answer.as_ref().map(|a| a.content.as_str()))
        .bind(post.answer.as_ref().map(|a| *a.answered_by.as_uuid()))
        .bind(post.answer.as_ref().map(|a| a.answered_at))
        .bind(post.answer.is_some())
        .bind(Json(&post.replies))
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> SpaceResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                space_id,
                author_id,
                content,
                attachments,
                difficulty_level,
                difficulty_score,
                knowledge_points,
                response_content,
                answered_by,
                answered_at,
                is_answered,
                replies,
                created_at,
                updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_post()).transpose()
    }

    async fn find_by_space(&self, space_id: &SpaceId) -> SpaceResult<Vec<PostView>> {
        let rows = sqlx::query_as::<_, PostViewRow>(
            r#"
            SELECT
                p.post_id,
                p.author_id,
                au.display_name AS author_name,
                p.content,
                p.attachments,
                p.difficulty_level,
                p.difficulty_score,
                p.knowledge_points,
                p.response_content,
                p.answered_by,
                ans.display_name AS answerer_name,
                p.answered_at,
                p.replies,
                p.created_at
            FROM posts p
            LEFT JOIN users au ON au.user_id = p.author_id
            LEFT JOIN users ans ON ans.user_id = p.answered_by
            WHERE p.space_id = $1
            ORDER BY p.difficulty_score DESC, p.created_at ASC
            "#,
        )
        .bind(space_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        // Reply authors live inside the JSON document; resolve them in one pass
        let mut reply_author_ids: Vec<Uuid> = rows
            .iter()
            .flat_map(|r| r.replies.0.iter())
            .filter_map(|reply| reply.author_id.map(|id| id.into_uuid()))
            .collect();
        reply_author_ids.sort_unstable();
        reply_author_ids.dedup();
        let names = self.display_names(&reply_author_ids).await?;

        rows.into_iter().map(|r| r.into_view(&names)).collect()
    }

    async fn answer(&self, post_id: &PostId, answer: &TutorAnswer) -> SpaceResult<()> {
        // One statement, so the answer fields can never flip partially
        let updated = sqlx::query(
            r#"
            UPDATE posts SET
                response_content = $2,
                answered_by = $3,
                answered_at = $4,
                is_answered = TRUE,
                updated_at = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(&answer.content)
        .bind(answer.answered_by.as_uuid())
        .bind(answer.answered_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(SpaceError::PostNotFound);
        }

        Ok(())
    }

    async fn set_ranking(&self, post_id: &PostId, ranking: &DifficultyRanking) -> SpaceResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE posts SET
                difficulty_level = $2,
                difficulty_score = $3,
                knowledge_points = $4,
                updated_at = $5
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(ranking.level.id())
        .bind(ranking.score)
        .bind(&ranking.knowledge_points)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(SpaceError::PostNotFound);
        }

        Ok(())
    }

    async fn add_reply(&self, post_id: &PostId, reply: &Reply) -> SpaceResult<()> {
        let updated = sqlx::query(
            "UPDATE posts SET replies = replies || $2, updated_at = $3 WHERE post_id = $1",
        )
        .bind(post_id.as_uuid())
        .bind(Json(std::slice::from_ref(reply)))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(SpaceError::PostNotFound);
        }

        Ok(())
    }

    async fn toggle_reply_like(
        &self,
        post_id: &PostId,
        reply_id: Uuid,
        user_id: &UserId,
    ) -> SpaceResult<bool> {
        let mut tx = self.pool.begin().await?;

        let replies = sqlx::query_scalar::<_, Json<Vec<Reply>>>(
            "SELECT replies FROM posts WHERE post_id = $1 FOR UPDATE",
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(Json(mut replies)) = replies else {
            return Err(SpaceError::PostNotFound);
        };

        let reply = replies
            .iter_mut()
            .find(|r| r.reply_id == reply_id)
            .ok_or(SpaceError::ReplyNotFound)?;
        let liked = reply.toggle_like(*user_id);

        sqlx::query("UPDATE posts SET replies = $2, updated_at = $3 WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .bind(Json(&replies))
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(liked)
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgSpaceRepository {
    async fn find_by_space(&self, space_id: &SpaceId) -> SpaceResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                space_id,
                space_name,
                join_code,
                tutor_id,
                starts_at,
                ends_at,
                total_posts,
                answered_posts,
                unanswered_posts,
                participant_count,
                average_difficulty_score,
                archived_data,
                is_archived,
                archived_at,
                created_at,
                updated_at
            FROM sessions
            WHERE space_id = $1
            "#,
        )
        .bind(space_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn find_by_id(&self, session_id: &SessionId) -> SpaceResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                space_id,
                space_name,
                join_code,
                tutor_id,
                starts_at,
                ends_at,
                total_posts,
                answered_posts,
                unanswered_posts,
                participant_count,
                average_difficulty_score,
                archived_data,
                is_archived,
                archived_at,
                created_at,
                updated_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn upsert(&self, session: &Session) -> SpaceResult<()> {
        // Keyed on space_id; the UNIQUE constraint enforces one session per
        // space and a re-archive keeps the original session_id
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                space_id,
                space_name,
                join_code,
                tutor_id,
                starts_at,
                ends_at,
                total_posts,
                answered_posts,
                unanswered_posts,
                participant_count,
                average_difficulty_score,
                archived_data,
                is_archived,
                archived_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ON CONFLICT (space_id) DO UPDATE SET
                space_name = EXCLUDED.space_name,
                join_code = EXCLUDED.join_code,
                tutor_id = EXCLUDED.tutor_id,
                starts_at = EXCLUDED.starts_at,
                ends_at = EXCLUDED.ends_at,
                total_posts = EXCLUDED.total_posts,
                answered_posts = EXCLUDED.answered_posts,
                unanswered_posts = EXCLUDED.unanswered_posts,
                participant_count = EXCLUDED.participant_count,
                average_difficulty_score = EXCLUDED.average_difficulty_score,
                archived_data = EXCLUDED.archived_data,
                is_archived = EXCLUDED.is_archived,
                archived_at = EXCLUDED.archived_at,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.space_id.as_uuid())
        .bind(&session.space_name)
        .bind(&session.join_code)
        .bind(session.tutor_id.as_uuid())
        .bind(session.starts_at)
        .bind(session.ends_at)
        .bind(session.statistics.total_posts)
        .bind(session.statistics.answered_posts)
        .bind(session.statistics.unanswered_posts)
        .bind(session.statistics.participant_count)
        .bind(session.statistics.average_difficulty_score)
        .bind(session.archived_data.as_ref().map(Json))
        .bind(session.is_archived)
        .bind(session.archived_at)
        .bind(session.created_at)
        .bind(session.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_archived(&self, tutor_id: Option<&UserId>) -> SpaceResult<Vec<SessionSummary>> {
        let rows = sqlx::query_as::<_, SessionSummaryRow>(
            r#"
            SELECT
                session_id,
                space_id,
                space_name,
                join_code,
                tutor_id,
                starts_at,
                ends_at,
                total_posts,
                answered_posts,
                unanswered_posts,
                participant_count,
                average_difficulty_score,
                archived_at
            FROM sessions
            WHERE is_archived = TRUE
              AND ($1::uuid IS NULL OR tutor_id = $1)
            ORDER BY archived_at DESC
            "#,
        )
        .bind(tutor_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_summary()).collect())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRefRow {
    user_id: Uuid,
    display_name: String,
}

impl UserRefRow {
    fn into_ref(self) -> UserRef {
        UserRef::new(UserId::from_uuid(self.user_id), self.display_name)
    }
}

#[derive(sqlx::FromRow)]
struct SpaceRow {
    space_id: Uuid,
    join_code: String,
    tutor_id: Uuid,
    name: String,
    description: Option<String>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SpaceRow {
    fn into_space(self) -> VirtualSpace {
        VirtualSpace {
            space_id: SpaceId::from_uuid(self.space_id),
            join_code: JoinCode::from_db(self.join_code),
            tutor_id: UserId::from_uuid(self.tutor_id),
            name: self.name,
            description: self.description,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            status: SpaceStatus::from_id(self.status).unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    space_id: Uuid,
    author_id: Option<Uuid>,
    content: String,
    attachments: Json<Vec<Attachment>>,
    difficulty_level: i16,
    difficulty_score: i32,
    knowledge_points: Vec<String>,
    response_content: Option<String>,
    answered_by: Option<Uuid>,
    answered_at: Option<DateTime<Utc>>,
    #[allow(dead_code)]
    is_answered: bool,
    replies: Json<Vec<Reply>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> SpaceResult<Post> {
        let answer = match (self.response_content, self.answered_by, self.answered_at) {
            (Some(content), Some(by), Some(at)) => Some(TutorAnswer {
                content,
                answered_by: UserId::from_uuid(by),
                answered_at: at,
            }),
            (None, None, None) => None,
            _ => {
                return Err(SpaceError::Internal(format!(
                    "Partial answer fields on post {}",
                    self.post_id
                )));
            }
        };

        Ok(Post {
            post_id: PostId::from_uuid(self.post_id),
            space_id: SpaceId::from_uuid(self.space_id),
            author_id: self.author_id.map(UserId::from_uuid),
            content: self.content,
            attachments: self.attachments.0,
            difficulty_level: DifficultyLevel::from_id(self.difficulty_level).unwrap_or_default(),
            difficulty_score: self.difficulty_score,
            knowledge_points: self.knowledge_points,
            answer,
            replies: self.replies.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PostViewRow {
    post_id: Uuid,
    author_id: Option<Uuid>,
    author_name: Option<String>,
    content: String,
    attachments: Json<Vec<Attachment>>,
    difficulty_level: i16,
    difficulty_score: i32,
    knowledge_points: Vec<String>,
    response_content: Option<String>,
    answered_by: Option<Uuid>,
    answerer_name: Option<String>,
    answered_at: Option<DateTime<Utc>>,
    replies: Json<Vec<Reply>>,
    created_at: DateTime<Utc>,
}

impl PostViewRow {
    fn into_view(self, reply_names: &HashMap<Uuid, String>) -> SpaceResult<PostView> {
        let author = self.author_id.map(|id| {
            let name = self.author_name.unwrap_or_else(|| UNKNOWN_USER.to_string());
            UserRef::new(UserId::from_uuid(id), name)
        });

        let answer = match (self.response_content, self.answered_by, self.answered_at) {
            (Some(content), Some(by), Some(at)) => {
                let name = self
                    .answerer_name
                    .unwrap_or_else(|| UNKNOWN_USER.to_string());
                Some(AnswerView {
                    content,
                    answered_by: UserRef::new(UserId::from_uuid(by), name),
                    answered_at: at,
                })
            }
            (None, None, None) => None,
            _ => {
                return Err(SpaceError::Internal(format!(
                    "Partial answer fields on post {}",
                    self.post_id
                )));
            }
        };

        let replies = self
            .replies
            .0
            .into_iter()
            .map(|reply| ReplyView {
                reply_id: reply.reply_id,
                author: reply.author_id.map(|id| {
                    let name = reply_names
                        .get(id.as_uuid())
                        .cloned()
                        .unwrap_or_else(|| UNKNOWN_USER.to_string());
                    UserRef::new(id, name)
                }),
                content: reply.content,
                likes: reply.likes,
                created_at: reply.created_at,
            })
            .collect();

        Ok(PostView {
            post_id: PostId::from_uuid(self.post_id),
            author,
            content: self.content,
            attachments: self.attachments.0,
            difficulty_level: DifficultyLevel::from_id(self.difficulty_level).unwrap_or_default(),
            difficulty_score: self.difficulty_score,
            knowledge_points: self.knowledge_points,
            answer,
            replies,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    space_id: Uuid,
    space_name: String,
    join_code: String,
    tutor_id: Uuid,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    total_posts: i32,
    answered_posts: i32,
    unanswered_posts: i32,
    participant_count: i32,
    average_difficulty_score: f64,
    archived_data: Option<Json<ArchivedSnapshot>>,
    is_archived: bool,
    archived_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: SessionId::from_uuid(self.session_id),
            space_id: SpaceId::from_uuid(self.space_id),
            space_name: self.space_name,
            join_code: self.join_code,
            tutor_id: UserId::from_uuid(self.tutor_id),
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            statistics: SessionStatistics {
                total_posts: self.total_posts,
                answered_posts: self.answered_posts,
                unanswered_posts: self.unanswered_posts,
                participant_count: self.participant_count,
                average_difficulty_score: self.average_difficulty_score,
            },
            archived_data: self.archived_data.map(|Json(snapshot)| snapshot),
            is_archived: self.is_archived,
            archived_at: self.archived_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionSummaryRow {
    session_id: Uuid,
    space_id: Uuid,
    space_name: String,
    join_code: String,
    tutor_id: Uuid,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    total_posts: i32,
    answered_posts: i32,
    unanswered_posts: i32,
    participant_count: i32,
    average_difficulty_score: f64,
    archived_at: DateTime<Utc>,
}

impl SessionSummaryRow {
    fn into_summary(self) -> SessionSummary {
        SessionSummary {
            session_id: SessionId::from_uuid(self.session_id),
            space_id: SpaceId::from_uuid(self.space_id),
            space_name: self.space_name,
            join_code: self.join_code,
            tutor_id: UserId::from_uuid(self.tutor_id),
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            statistics: SessionStatistics {
                total_posts: self.total_posts,
                answered_posts: self.answered_posts,
                unanswered_posts: self.unanswered_posts,
                participant_count: self.participant_count,
                average_difficulty_score: self.average_difficulty_score,
            },
            archived_at: self.archived_at,
        }
    }
}

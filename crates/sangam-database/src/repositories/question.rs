//! Question and answer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_entity::question::{Answer, Question};

/// Repository for community questions and their answers.
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    /// Create a new question repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new question.
    pub async fn create(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
        category: &str,
        tags: &[String],
    ) -> AppResult<Question> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (author_id, title, content, category, tags) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(author_id)
        .bind(title)
        .bind(content)
        .bind(category)
        .bind(tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create question", e))
    }

    /// Find a question by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find question", e))
    }

    /// Fetch a question and bump its view counter in one statement.
    pub async fn find_and_bump_views(&self, id: Uuid) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            "UPDATE questions SET views = views + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load question", e))
    }

    /// List questions, newest first, optionally filtered by category.
    pub async fn list(
        &self,
        category: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Question>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM questions WHERE ($1::text IS NULL OR category = $1)",
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count questions", e))?;

        let questions = sqlx::query_as::<_, Question>(
            "SELECT * FROM questions WHERE ($1::text IS NULL OR category = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(category)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list questions", e))?;

        Ok(PageResponse::new(
            questions,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update a question's editable fields, scoped to its author.
    pub async fn update(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
        category: Option<&str>,
        tags: Option<&[String]>,
    ) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            "UPDATE questions SET \
                title = COALESCE($3, title), \
                content = COALESCE($4, content), \
                category = COALESCE($5, category), \
                tags = COALESCE($6, tags), \
                updated_at = NOW() \
             WHERE id = $1 AND author_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(author_id)
        .bind(title)
        .bind(content)
        .bind(category)
        .bind(tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update question", e))
    }

    /// Delete a question owned by the author. Answers cascade.
    pub async fn delete(&self, id: Uuid, author_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete question", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a vote delta to a question.
    pub async fn vote(&self, id: Uuid, upvote: bool) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            "UPDATE questions SET \
                upvotes = upvotes + CASE WHEN $2 THEN 1 ELSE 0 END, \
                downvotes = downvotes + CASE WHEN $2 THEN 0 ELSE 1 END \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(upvote)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record vote", e))
    }

    // ── Answers ──────────────────────────────────────────────────

    /// Insert an answer and bump the question's answer count together.
    ///
    /// Returns `None` when the question does not exist.
    pub async fn add_answer(
        &self,
        question_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> AppResult<Option<Answer>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let bumped = sqlx::query(
            "UPDATE questions SET answers_count = answers_count + 1 WHERE id = $1",
        )
        .bind(question_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update answer count", e)
        })?;

        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        let answer = sqlx::query_as::<_, Answer>(
            "INSERT INTO answers (question_id, author_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(question_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create answer", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(Some(answer))
    }

    /// Answers for a question, oldest first.
    pub async fn list_answers(&self, question_id: Uuid) -> AppResult<Vec<Answer>> {
        sqlx::query_as::<_, Answer>(
            "SELECT * FROM answers WHERE question_id = $1 ORDER BY created_at ASC",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list answers", e))
    }

    /// Apply a vote delta to an answer.
    pub async fn vote_answer(&self, id: Uuid, upvote: bool) -> AppResult<Option<Answer>> {
        sqlx::query_as::<_, Answer>(
            "UPDATE answers SET \
                upvotes = upvotes + CASE WHEN $2 THEN 1 ELSE 0 END, \
                downvotes = downvotes + CASE WHEN $2 THEN 0 ELSE 1 END \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(upvote)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record vote", e))
    }
}

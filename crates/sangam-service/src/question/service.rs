//! Community Q&A: ask, browse, answer, vote.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_database::repositories::question::QuestionRepository;
use sangam_entity::notification::NotificationKind;
use sangam_entity::question::{Answer, Question};

use crate::context::RequestContext;
use crate::notification::fanout::Notifier;

/// Maximum question title length.
const MAX_TITLE_LENGTH: usize = 200;
/// Maximum question and answer body length.
const MAX_CONTENT_LENGTH: usize = 10_000;
/// Maximum tags per question.
const MAX_TAGS: usize = 5;

/// A question together with its answers.
#[derive(Debug, Clone, serde::Serialize)]
pub struct QuestionWithAnswers {
    /// The question.
    #[serde(flatten)]
    pub question: Question,
    /// Answers, oldest first.
    pub answers: Vec<Answer>,
}

/// Manages the community Q&A board.
#[derive(Debug, Clone)]
pub struct QuestionService {
    questions: Arc<QuestionRepository>,
    notifier: Notifier,
}

impl QuestionService {
    /// Creates a new question service.
    pub fn new(questions: Arc<QuestionRepository>, notifier: Notifier) -> Self {
        Self {
            questions,
            notifier,
        }
    }

    /// Posts a new question.
    pub async fn ask(
        &self,
        ctx: &RequestContext,
        title: &str,
        content: &str,
        category: &str,
        tags: Vec<String>,
    ) -> AppResult<Question> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(AppError::validation("Question title is required"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::validation(format!(
                "Title exceeds {MAX_TITLE_LENGTH} characters"
            )));
        }
        if content.is_empty() {
            return Err(AppError::validation("Question content is required"));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::validation(format!(
                "Content exceeds {MAX_CONTENT_LENGTH} characters"
            )));
        }
        if category.trim().is_empty() {
            return Err(AppError::validation("Question category is required"));
        }
        if tags.len() > MAX_TAGS {
            return Err(AppError::validation(format!(
                "At most {MAX_TAGS} tags are allowed"
            )));
        }

        let question = self
            .questions
            .create(ctx.user_id, title, content, category.trim(), &tags)
            .await?;

        info!(question_id = %question.id, author = %ctx.user_id, "Question posted");
        Ok(question)
    }

    /// Lists questions, newest first, optionally filtered by category.
    pub async fn list(
        &self,
        category: Option<&str>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Question>> {
        self.questions.list(category, &page).await
    }

    /// Loads a question with its answers, counting the view.
    pub async fn get(&self, question_id: Uuid) -> AppResult<QuestionWithAnswers> {
        let question = self
            .questions
            .find_and_bump_views(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))?;

        let answers = self.questions.list_answers(question_id).await?;
        Ok(QuestionWithAnswers { question, answers })
    }

    /// Updates the current user's own question.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        question_id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
        category: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> AppResult<Question> {
        let existing = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))?;
        if existing.author_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the author can edit this question",
            ));
        }

        self.questions
            .update(
                question_id,
                ctx.user_id,
                title,
                content,
                category,
                tags.as_deref(),
            )
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))
    }

    /// Deletes the current user's own question.
    pub async fn delete(&self, ctx: &RequestContext, question_id: Uuid) -> AppResult<()> {
        let existing = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))?;
        if existing.author_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the author can delete this question",
            ));
        }

        self.questions.delete(question_id, ctx.user_id).await?;
        info!(question_id = %question_id, "Question deleted");
        Ok(())
    }

    /// Posts an answer and notifies the question's author.
    pub async fn answer(
        &self,
        ctx: &RequestContext,
        question_id: Uuid,
        content: &str,
    ) -> AppResult<Answer> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::validation("Answer content is required"));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::validation(format!(
                "Content exceeds {MAX_CONTENT_LENGTH} characters"
            )));
        }

        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))?;

        let answer = self
            .questions
            .add_answer(question_id, ctx.user_id, content)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))?;

        if question.author_id != ctx.user_id {
            self.notifier
                .notify(
                    question.author_id,
                    NotificationKind::AnswerPosted,
                    "New answer",
                    &format!("{} answered your question", ctx.username),
                    Some(ctx.user_id),
                    Some(question.id),
                )
                .await?;
        }

        info!(answer_id = %answer.id, question_id = %question_id, "Answer posted");
        Ok(answer)
    }

    /// Records a vote on a question.
    pub async fn vote(&self, question_id: Uuid, upvote: bool) -> AppResult<Question> {
        self.questions
            .vote(question_id, upvote)
            .await?
            .ok_or_else(|| AppError::not_found("Question not found"))
    }

    /// Records a vote on an answer.
    pub async fn vote_answer(&self, answer_id: Uuid, upvote: bool) -> AppResult<Answer> {
        self.questions
            .vote_answer(answer_id, upvote)
            .await?
            .ok_or_else(|| AppError::not_found("Answer not found"))
    }
}

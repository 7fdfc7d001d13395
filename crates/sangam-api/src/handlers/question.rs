//! Community Q&A endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sangam_core::types::pagination::PageResponse;
use sangam_core::types::response::ApiResponse;
use sangam_entity::question::{Answer, Question};
use sangam_service::question::QuestionWithAnswers;

use crate::dto::request::{
    AnswerRequest, AskQuestionRequest, QuestionFilter, UpdateQuestionRequest, VoteRequest,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// `POST /api/questions`
pub async fn ask(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<AskQuestionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Question>>), ApiError> {
    let question = state
        .question_service
        .ask(&ctx, &req.title, &req.content, &req.category, req.tags)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(question))))
}

/// `GET /api/questions`
pub async fn list(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    Query(filter): Query<QuestionFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Question>>>, ApiError> {
    let page = state
        .question_service
        .list(filter.category.as_deref(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// `GET /api/questions/{id}`
pub async fn get(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    Path(question_id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuestionWithAnswers>>, ApiError> {
    let question = state.question_service.get(question_id).await?;
    Ok(Json(ApiResponse::ok(question)))
}

/// `PUT /api/questions/{id}`
pub async fn update(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(question_id): Path<Uuid>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Result<Json<ApiResponse<Question>>, ApiError> {
    let question = state
        .question_service
        .update(
            &ctx,
            question_id,
            req.title.as_deref(),
            req.content.as_deref(),
            req.category.as_deref(),
            req.tags,
        )
        .await?;
    Ok(Json(ApiResponse::ok(question)))
}

/// `DELETE /api/questions/{id}`
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(question_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.question_service.delete(&ctx, question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/questions/{id}/answers`
pub async fn answer(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(question_id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Answer>>), ApiError> {
    let answer = state
        .question_service
        .answer(&ctx, question_id, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(answer))))
}

/// `POST /api/questions/{id}/vote`
pub async fn vote(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    Path(question_id): Path<Uuid>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<ApiResponse<Question>>, ApiError> {
    let question = state.question_service.vote(question_id, req.upvote).await?;
    Ok(Json(ApiResponse::ok(question)))
}

/// `POST /api/answers/{id}/vote`
pub async fn vote_answer(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    Path(answer_id): Path<Uuid>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<ApiResponse<Answer>>, ApiError> {
    let answer = state
        .question_service
        .vote_answer(answer_id, req.upvote)
        .await?;
    Ok(Json(ApiResponse::ok(answer)))
}

//! Question handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use core_kernel::{QuestionId, UserId};
use domain_question::QuestionError;

use crate::dto::question::{CreateQuestionRequest, QuestionResponse};
use crate::{error::ApiError, handlers::decode_body, AppState};

/// Lists all questions
///
/// Store failures are 500 here, unlike the single-item routes.
#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = state.questions.get_all().await.map_err(|e| match e {
        QuestionError::Storage(_) => ApiError::Internal(e.to_string()),
        other => other.into(),
    })?;

    Ok(Json(questions.into_iter().map(QuestionResponse::from).collect()))
}

/// Gets a question by ID
#[instrument(skip(state))]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let id: QuestionId = id.parse()?;
    let question = state.questions.get_by_id(id).await?;
    Ok(Json(question.into()))
}

/// Creates a question
#[instrument(skip(state, body))]
pub async fn create_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let request: CreateQuestionRequest = decode_body(&body)?;
    let question = state
        .questions
        .save(UserId::from_uuid(request.user_id), request.text)
        .await?;
    Ok((StatusCode::CREATED, Json(question.into())))
}

/// Deletes a question and its answers
#[instrument(skip(state))]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: QuestionId = id.parse()?;
    state.questions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Answer handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use core_kernel::{AnswerId, QuestionId, UserId};
use domain_answer::AnswerError;

use crate::dto::answer::{AnswerResponse, CreateAnswerRequest};
use crate::{error::ApiError, handlers::decode_body, AppState};

/// Lists all answers
#[instrument(skip(state))]
pub async fn list_answers(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnswerResponse>>, ApiError> {
    let answers = state.answers.get_all().await.map_err(|e| match e {
        AnswerError::Storage(_) => ApiError::Internal(e.to_string()),
        other => other.into(),
    })?;

    Ok(Json(answers.into_iter().map(AnswerResponse::from).collect()))
}

/// Gets an answer by ID
#[instrument(skip(state))]
pub async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let id: AnswerId = id.parse()?;
    let answer = state.answers.get_by_id(id).await?;
    Ok(Json(answer.into()))
}

/// Creates an answer to the question in the path
#[instrument(skip(state, body))]
pub async fn create_answer(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<AnswerResponse>), ApiError> {
    let question_id: QuestionId = question_id.parse()?;
    let request: CreateAnswerRequest = decode_body(&body)?;
    let answer = state
        .answers
        .save(question_id, UserId::from_uuid(request.user_id), request.text)
        .await?;
    Ok((StatusCode::CREATED, Json(answer.into())))
}

/// Deletes an answer
#[instrument(skip(state))]
pub async fn delete_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: AnswerId = id.parse()?;
    state.answers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::warn;

use crate::dto::question_bank_dto::{
    CapacityResponse, NextQuestionRequest, QuestionCountResponse, QuestionHistoryResponse,
    QuestionIdRequest, QuestionIdResponse, ValidateQuestionResponse,
};
use crate::models::question::ComposedQuestion;
use crate::services::question_validator::inspect_question;
use crate::utils::token::generate_question_id;
use crate::utils::validation::{validate, validate_session_id};
use crate::AppState;

#[axum::debug_handler]
pub async fn next_question(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<NextQuestionRequest>, JsonRejection>,
) -> crate::error::Result<Response> {
    validate_session_id(&session_id)?;
    let Json(payload) = payload?;
    validate(&payload)?;

    let question = state
        .question_bank
        .get_next_question(&session_id, &payload.role, payload.difficulty_level());

    let issues = inspect_question(&question);
    if !issues.is_empty() {
        warn!(
            session_id = %session_id,
            question_id = %question.id,
            ?issues,
            "composed question failed validation"
        );
    }

    Ok((StatusCode::OK, Json(question)).into_response())
}

#[axum::debug_handler]
pub async fn session_stats(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> crate::error::Result<Response> {
    validate_session_id(&session_id)?;
    let stats = state.question_bank.get_session_stats(&session_id);
    Ok(Json(stats).into_response())
}

#[axum::debug_handler]
pub async fn question_count(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> crate::error::Result<Response> {
    validate_session_id(&session_id)?;
    let count = state.question_bank.get_question_count(&session_id);
    Ok(Json(QuestionCountResponse { session_id, count }).into_response())
}

#[axum::debug_handler]
pub async fn question_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> crate::error::Result<Response> {
    validate_session_id(&session_id)?;
    let questions = state.question_bank.get_question_history(&session_id);
    Ok(Json(QuestionHistoryResponse {
        session_id,
        questions,
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> crate::error::Result<Response> {
    validate_session_id(&session_id)?;
    state.question_bank.clear_session(&session_id);
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[axum::debug_handler]
pub async fn validate_question(
    payload: Result<Json<ComposedQuestion>, JsonRejection>,
) -> crate::error::Result<Response> {
    let Json(question) = payload?;
    let issues = inspect_question(&question);
    let body = ValidateQuestionResponse {
        valid: issues.is_empty(),
        issues: issues.into_iter().map(Into::into).collect(),
    };
    Ok(Json(body).into_response())
}

#[axum::debug_handler]
pub async fn question_id(
    payload: Result<Json<QuestionIdRequest>, JsonRejection>,
) -> crate::error::Result<Response> {
    let Json(payload) = payload?;
    validate(&payload)?;
    let id = generate_question_id(
        &payload.discipline,
        &payload.topic,
        payload.question_type.as_str(),
        payload.sequence_index,
    );
    Ok(Json(QuestionIdResponse { id }).into_response())
}

#[axum::debug_handler]
pub async fn capacity(State(state): State<AppState>) -> crate::error::Result<Response> {
    Ok(Json(CapacityResponse::from(state.question_bank.capacity())).into_response())
}

#[axum::debug_handler]
pub async fn metrics(State(state): State<AppState>) -> crate::error::Result<Response> {
    Ok(Json(state.question_bank.performance()).into_response())
}

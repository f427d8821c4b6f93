use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::prompts;
use crate::AppState;

use super::models::{
    CategorizeRequest, CategorizeResponse, ErrorResponse, GenerateRequest, GenerateResponse,
    TopicsRequest, TopicsResponse,
};

const NO_CONTEXT: &str = "No context provided";
const MISSING_QUERY_OR_TOPICS: &str = "Both 'query' and 'topics' must be provided";

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadBody {
            status: rejection.status(),
            message: rejection.body_text(),
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Answers a question grounded in the supplied lecture context.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let body = decode(payload)?;
    let context = non_empty(body.context).ok_or(ApiError::Validation(NO_CONTEXT))?;
    let query = body.query.unwrap_or_default();

    let context_chars = context.chars().count();
    tracing::info!(
        context_chars,
        truncated = context_chars > prompts::ANSWER_CONTEXT_CHARS,
        query_len = query.len(),
        "generate"
    );

    let prompt = prompts::answer_prompt(&context, &query);
    let reply = state.model.generate(&prompt).await?;

    Ok(Json(GenerateResponse {
        answer: reply.trim().to_string(),
    }))
}

/// Extracts the main topic titles from a document.
pub async fn topics(
    State(state): State<AppState>,
    payload: Result<Json<TopicsRequest>, JsonRejection>,
) -> Result<Json<TopicsResponse>, ApiError> {
    let body = decode(payload)?;
    let context = non_empty(body.context).ok_or(ApiError::Validation(NO_CONTEXT))?;

    let prompt = prompts::topics_prompt(&context);
    let reply = state.model.generate(&prompt).await?;
    let topics = prompts::parse_topics(&reply);

    tracing::info!(topic_count = topics.len(), "topics extracted");

    Ok(Json(TopicsResponse { topics }))
}

/// Picks the listed topic most related to a question.
pub async fn categorize(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<CategorizeResponse>, ApiError> {
    let body = decode(payload)?;
    let (query, topics) = match (non_empty(body.query), body.topics) {
        (Some(query), Some(topics)) if !topics.is_empty() => (query, topics),
        _ => return Err(ApiError::Validation(MISSING_QUERY_OR_TOPICS)),
    };

    tracing::debug!(topic_count = topics.len(), "categorize");

    let prompt = prompts::categorize_prompt(&query, &topics);
    let reply = state.model.generate(&prompt).await?;

    Ok(Json(CategorizeResponse {
        related_topic: reply.trim().to_string(),
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

//! REST API endpoints for training sessions

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::model::{ConversationTurn, SessionStatus};
use crate::service::TrainingSessionService;

/// Response for session creation
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub status: SessionStatus,
}

/// Request body for submitting a turn
#[derive(Debug, Deserialize, ToSchema)]
pub struct TurnRequest {
    /// The trainee's message for this turn
    pub message: String,
}

/// Disclosure detail for a submitted turn
#[derive(Debug, Serialize, ToSchema)]
pub struct DisclosureDetail {
    pub has_identifier: bool,
    pub has_secret: bool,
    pub revealed: bool,
}

/// Result of a submitted turn
#[derive(Debug, Serialize, ToSchema)]
pub struct TurnResponse {
    pub status: SessionStatus,
    pub attempts: u32,
    pub disclosure: DisclosureDetail,
    /// Next adversarial message while the session stays active
    pub bot_message: Option<String>,
    /// Closing message on a terminal transition
    pub debrief: Option<String>,
}

/// Session summary for display
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub attempts: u32,
    pub credentials_revealed: bool,
    pub created_at: String,
    pub history: Vec<ConversationTurn>,
}

/// Start a new training session
#[utoipa::path(
    post,
    path = "/v1/sessions",
    responses(
        (status = 201, description = "Session created", body = CreateSessionResponse)
    ),
    tag = "training"
)]
#[post("/v1/sessions")]
pub async fn create_session(
    service: web::Data<TrainingSessionService>,
) -> Result<HttpResponse, ApiError> {
    let session_id = service.create_session();

    Ok(HttpResponse::Created().json(CreateSessionResponse {
        session_id,
        status: SessionStatus::Active,
    }))
}

/// Submit a turn to a training session
#[utoipa::path(
    post,
    path = "/v1/sessions/{id}/turns",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = TurnRequest,
    responses(
        (status = 200, description = "Turn processed", body = TurnResponse),
        (status = 400, description = "Empty message"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session ended or busy"),
        (status = 502, description = "Generation service failure")
    ),
    tag = "training"
)]
#[post("/v1/sessions/{id}/turns")]
pub async fn submit_turn(
    service: web::Data<TrainingSessionService>,
    path: web::Path<Uuid>,
    body: web::Json<TurnRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let message = body.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }

    let outcome = service.submit_turn(id, message).await?;

    Ok(HttpResponse::Ok().json(TurnResponse {
        status: outcome.status,
        attempts: outcome.attempts,
        disclosure: DisclosureDetail {
            has_identifier: outcome.disclosure.has_identifier,
            has_secret: outcome.disclosure.has_secret,
            revealed: outcome.disclosure.revealed(),
        },
        bot_message: outcome.bot_message,
        debrief: outcome.debrief.map(str::to_string),
    }))
}

/// Fetch a session summary
#[utoipa::path(
    get,
    path = "/v1/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session busy")
    ),
    tag = "training"
)]
#[get("/v1/sessions/{id}")]
pub async fn get_session(
    service: web::Data<TrainingSessionService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let entry = service.get_session(id)?;

    Ok(HttpResponse::Ok().json(SessionResponse {
        session_id: id,
        status: entry.state.status,
        attempts: entry.state.attempts,
        credentials_revealed: entry.state.credentials_revealed,
        created_at: entry.created_at.to_rfc3339(),
        history: entry.state.history,
    }))
}

/// Configure training session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_session)
        .service(submit_turn)
        .service(get_session);
}

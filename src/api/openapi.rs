//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::{analyze, health, session};
use crate::model::{AnalysisReport, ConfidenceLevel, ConversationTurn, SessionStatus};

/// API documentation root
#[derive(OpenApi)]
#[openapi(
    paths(
        analyze::analyze_message,
        session::create_session,
        session::submit_turn,
        session::get_session,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        analyze::AnalyzeRequest,
        analyze::AnalyzeResponse,
        session::CreateSessionResponse,
        session::TurnRequest,
        session::TurnResponse,
        session::DisclosureDetail,
        session::SessionResponse,
        AnalysisReport,
        ConfidenceLevel,
        ConversationTurn,
        SessionStatus,
    )),
    tags(
        (name = "analysis", description = "Phishing message analysis"),
        (name = "training", description = "Awareness training sessions"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

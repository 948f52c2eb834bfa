//! REST API endpoint for phishing message analysis

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::AnalysisReport;
use crate::service::MessageAnalysisService;
use crate::service::analysis::AnalysisError;

/// Request body for message analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// The message to evaluate for phishing characteristics
    pub message: String,
}

/// Analysis result
///
/// `raw_output` is set only when the model reply had no recognizable
/// structure; the raw text is surfaced rather than lost.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub report: Option<AnalysisReport>,
    pub raw_output: Option<String>,
}

/// Analyze a message for phishing characteristics
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Message analyzed", body = AnalyzeResponse),
        (status = 400, description = "Empty message"),
        (status = 502, description = "Generation service failure")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze")]
pub async fn analyze_message(
    service: web::Data<MessageAnalysisService>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }

    match service.analyze(message).await {
        Ok(report) => Ok(HttpResponse::Ok().json(AnalyzeResponse {
            report: Some(report),
            raw_output: None,
        })),
        // Degenerate model output: display it rather than lose it
        Err(AnalysisError::Unstructured { raw }) => Ok(HttpResponse::Ok().json(AnalyzeResponse {
            report: None,
            raw_output: Some(raw),
        })),
        Err(e) => Err(e.into()),
    }
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_message);
}

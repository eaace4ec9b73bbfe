use actix_web::{post, web, HttpResponse};

use crate::{
    error::ApiError,
    logic::analyzer::{failure_message, inspect, Verdict},
    models::request::{AnalysisResponse, ErrorResponse},
};

/// POST /api/analyze
/// Runs the leaf photo heuristic over a raw PNG or JPEG request body.
/// Undecodable images still answer 200 with an explanatory message.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body(content = Vec<u8>, content_type = "image/png", description = "PNG or JPEG bytes"),
    responses(
        (status = 200, description = "Diagnostic message", body = AnalysisResponse),
        (status = 400, description = "Empty body", body = ErrorResponse),
    )
)]
#[post("/analyze")]
pub async fn analyze_image(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    if body.is_empty() {
        return Err(ApiError::EmptyUpload);
    }
    let size = body.len();
    let outcome = tokio::task::spawn_blocking(move || inspect(&body))
        .await
        .map_err(|e| {
            log::error!("image analysis task failed: {e}");
            ApiError::AnalysisAborted
        })?;

    let response = match outcome {
        Ok(report) => {
            log::info!(
                "analyzed {}x{} image: green ratio {:.3}, {:?}",
                report.width,
                report.height,
                report.green_ratio,
                report.verdict
            );
            AnalysisResponse {
                message: report.verdict.message().into(),
                healthy: Some(report.verdict == Verdict::LikelyHealthy),
                green_ratio: Some(report.green_ratio),
                width: Some(report.width),
                height: Some(report.height),
            }
        }
        Err(e) => {
            log::warn!("could not decode {size}-byte upload: {e}");
            AnalysisResponse {
                message: failure_message(&e),
                healthy: None,
                green_ratio: None,
                width: None,
                height: None,
            }
        }
    };
    Ok(HttpResponse::Ok().json(response))
}

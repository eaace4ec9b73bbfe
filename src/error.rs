use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{request::ErrorResponse, session::SessionId};

/// Failures surfaced by the HTTP layer. Each renders as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session '{0}' not found.")]
    SessionNotFound(SessionId),

    #[error("Quick action '{0}' not found.")]
    QuickActionNotFound(String),

    #[error(transparent)]
    InvalidDimensions(#[from] DimensionError),

    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid.")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Prompt must not be empty.")]
    EmptyPrompt,

    #[error("Upload a PNG or JPEG image in the request body.")]
    EmptyUpload,

    #[error("Image analysis was interrupted.")]
    AnalysisAborted,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) | ApiError::QuickActionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::AnalysisAborted => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Grid dimensions outside `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Grid dimensions must be between 1 and 12 (got {rows}x{cols}).")]
pub struct DimensionError {
    pub rows: usize,
    pub cols: usize,
}

/// Why a saved layout document could not be read back.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Layout is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout has invalid dimensions: {0}")]
    Dimensions(#[from] DimensionError),

    #[error("Layout declares {expected} row(s) of {cols} cell(s) but row {row} has {found}.")]
    Shape {
        expected: usize,
        cols: usize,
        row: usize,
        found: usize,
    },

    #[error("Layout declares {expected} row(s) but contains {found}.")]
    RowCount { expected: usize, found: usize },
}

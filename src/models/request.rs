use std::collections::HashMap;

use actix_web::http::Method;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{
    chat::{ChatLog, ChatMessage},
    garden::{Cell, GardenGrid},
    plant::PlantId,
    session::{Mode, Session, SessionId},
    Matrix,
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Links every session-scoped response carries.
pub fn session_links(id: SessionId) -> Links {
    let base = format!("/api/sessions/{id}");
    let mut links = HashMap::new();
    links.insert("session".into(), link(base.clone(), Method::GET));
    links.insert("grid".into(), link(format!("{base}/grid"), Method::GET));
    links.insert("layout".into(), link(format!("{base}/layout"), Method::GET));
    links.insert("chat".into(), link(format!("{base}/chat"), Method::GET));
    links
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    SessionApiResponse = ApiResponse<SessionView>,
    GridApiResponse = ApiResponse<GridView>,
    CellApiResponse = ApiResponse<CellEditResponse>,
    ChatApiResponse = ApiResponse<ChatView>,
    ChatReplyApiResponse = ApiResponse<ChatReplyResponse>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ModeRequest {
    pub mode: Mode,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SelectionRequest {
    pub plant: PlantId,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResizeRequest {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub prompt: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    #[schema(value_type = Vec<Vec<Cell>>)]
    pub cells: Matrix<Cell>,
    /// Button labels: the plant emoji, or `—` for an empty cell.
    #[schema(value_type = Vec<Vec<String>>)]
    pub labels: Matrix<String>,
    pub selection: PlantId,
}

impl GridView {
    pub fn new(grid: &GardenGrid, selection: PlantId) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells: grid.cells.clone(),
            labels: grid.labels(),
            selection,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
    pub transcript: Vec<String>,
}

impl From<&ChatLog> for ChatView {
    fn from(log: &ChatLog) -> Self {
        Self {
            messages: log.messages().to_vec(),
            transcript: log.transcript(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: SessionId,
    pub mode: Mode,
    pub selection: PlantId,
    pub grid: GridView,
    pub chat: ChatView,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            mode: session.mode,
            selection: session.selection,
            grid: GridView::new(&session.grid, session.selection),
            chat: ChatView::from(&session.chat),
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CellEditResponse {
    pub row: usize,
    pub col: usize,
    pub plant: Option<PlantId>,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReplyResponse {
    pub reply: String,
    pub chat: ChatView,
}

/// Result of the leaf photo heuristic. Measurements are omitted when the
/// upload could not be decoded.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub message: String,
    pub healthy: Option<bool>,
    pub green_ratio: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TipsResponse {
    pub featured: String,
    pub tips: Vec<String>,
}

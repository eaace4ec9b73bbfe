use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    error::ApiError,
    models::{
        request::{
            session_links, ApiResponse, ErrorResponse, ModeRequest, SelectionRequest,
            SessionApiResponse, SessionView,
        },
        session::{Session, SessionId},
    },
    store::SessionStore,
};

/// Applies `update` and snapshots the session under a single store lock.
fn update_session(
    store: &SessionStore,
    id: SessionId,
    update: impl FnOnce(&mut Session),
) -> Result<HttpResponse, ApiError> {
    let view = store.with_session(id, |s| {
        update(s);
        Ok(SessionView::from(&*s))
    })?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(view, session_links(id))))
}

/// POST /api/sessions
/// Starts a new session with an empty default grid and an empty chat.
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "sessions",
    responses((status = 201, description = "Session created", body = SessionApiResponse))
)]
#[post("/sessions")]
pub async fn create_session(store: web::Data<SessionStore>) -> HttpResponse {
    let session = store.create();
    log::info!("session {} created ({} active)", session.id, store.len());
    HttpResponse::Created().json(ApiResponse::new(
        SessionView::from(&session),
        session_links(session.id),
    ))
}

/// GET /api/sessions/{id}
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    tag = "sessions",
    params(("id" = u64, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session state", body = SessionApiResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[get("/sessions/{id}")]
pub async fn get_session(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
) -> Result<HttpResponse, ApiError> {
    update_session(&store, path.into_inner(), |_| {})
}

/// DELETE /api/sessions/{id}
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    tag = "sessions",
    params(("id" = u64, Path, description = "Session id")),
    responses(
        (status = 204, description = "Session dropped"),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[delete("/sessions/{id}")]
pub async fn delete_session(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    store.remove(id)?;
    log::info!("session {id} dropped");
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/sessions/{id}/mode
/// Switches between the Urban and Rural views.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/mode",
    tag = "sessions",
    params(("id" = u64, Path, description = "Session id")),
    request_body = ModeRequest,
    responses(
        (status = 200, description = "Mode updated", body = SessionApiResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[put("/sessions/{id}/mode")]
pub async fn set_mode(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
    body: web::Json<ModeRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mode = body.into_inner().mode;
    update_session(&store, id, |s| s.set_mode(mode))
}

/// PUT /api/sessions/{id}/selection
/// Picks the palette entry used by the next cell edits.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/selection",
    tag = "garden",
    params(("id" = u64, Path, description = "Session id")),
    request_body = SelectionRequest,
    responses(
        (status = 200, description = "Selection updated", body = SessionApiResponse),
        (status = 400, description = "Unknown plant", body = ErrorResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[put("/sessions/{id}/selection")]
pub async fn set_selection(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
    body: web::Json<SelectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let plant = body.into_inner().plant;
    let response = update_session(&store, id, |s| s.select(plant))?;
    log::debug!("session {id} selected {plant}");
    Ok(response)
}

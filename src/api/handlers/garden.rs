use actix_web::{get, http::header::ContentDisposition, post, put, web, HttpResponse};

use crate::{
    error::ApiError,
    logic::layout::{export_layout, LAYOUT_FILE_NAME},
    models::{
        garden::{Cell, GardenGrid, GridSize},
        request::{
            session_links, ApiResponse, CellApiResponse, CellEditResponse, ErrorResponse,
            GridApiResponse, GridView, ResizeRequest,
        },
        session::SessionId,
    },
    store::SessionStore,
};

/// GET /api/sessions/{id}/grid
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/grid",
    tag = "garden",
    params(("id" = u64, Path, description = "Session id")),
    responses(
        (status = 200, description = "Current grid", body = GridApiResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[get("/sessions/{id}/grid")]
pub async fn get_grid(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let view = store.with_session(id, |s| Ok(GridView::new(&s.grid, s.selection)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(view, session_links(id))))
}

/// PUT /api/sessions/{id}/grid
/// Changes the grid dimensions. Any change clears every cell.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}/grid",
    tag = "garden",
    params(("id" = u64, Path, description = "Session id")),
    request_body = ResizeRequest,
    responses(
        (status = 200, description = "Resized grid", body = GridApiResponse),
        (status = 400, description = "Dimensions outside 1..=12", body = ErrorResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[put("/sessions/{id}/grid")]
pub async fn resize_grid(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
    body: web::Json<ResizeRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let ResizeRequest { rows, cols } = body.into_inner();
    let size = GridSize::new(rows, cols)?;
    let view = store.with_session(id, |s| {
        if s.grid.resize(size) {
            log::info!("session {id} grid reset to {rows}x{cols}");
        }
        Ok(GridView::new(&s.grid, s.selection))
    })?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(view, session_links(id))))
}

/// POST /api/sessions/{id}/grid/cells/{row}/{col}
/// Plants the selected plant in the cell, or clears it when "empty" is selected.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/grid/cells/{row}/{col}",
    tag = "garden",
    params(
        ("id" = u64, Path, description = "Session id"),
        ("row" = usize, Path, description = "Zero-based row"),
        ("col" = usize, Path, description = "Zero-based column"),
    ),
    responses(
        (status = 200, description = "Edited cell", body = CellApiResponse),
        (status = 400, description = "Cell outside the grid", body = ErrorResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[post("/sessions/{id}/grid/cells/{row}/{col}")]
pub async fn edit_cell(
    store: web::Data<SessionStore>,
    path: web::Path<(SessionId, usize, usize)>,
) -> Result<HttpResponse, ApiError> {
    let (id, row, col) = path.into_inner();
    let plant = store.with_session(id, |s| s.edit_cell(row, col))?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        CellEditResponse {
            row,
            col,
            plant,
            label: Cell { plant }.label().into(),
        },
        session_links(id),
    )))
}

/// GET /api/sessions/{id}/layout
/// Downloads the grid as `garden-layout.json`.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/layout",
    tag = "garden",
    params(("id" = u64, Path, description = "Session id")),
    responses(
        (status = 200, description = "Layout document", body = GardenGrid, content_type = "application/json"),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[get("/sessions/{id}/layout")]
pub async fn export(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let document = store.with_session(id, |s| Ok(export_layout(&s.grid)))?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header(ContentDisposition::attachment(LAYOUT_FILE_NAME))
        .body(document))
}

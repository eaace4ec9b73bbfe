use actix_web::{get, HttpResponse, Responder};

use crate::{
    logic::toolkit::{featured_tip, QUICK_TIPS},
    models::{
        plant::{palette, PaletteEntry},
        request::TipsResponse,
    },
};

/// GET /api/palette
/// Returns the plants that can be placed, the remove marker last.
#[utoipa::path(
    get,
    path = "/api/palette",
    tag = "garden",
    responses((status = 200, description = "Palette entries", body = [PaletteEntry]))
)]
#[get("/palette")]
pub async fn get_palette() -> impl Responder {
    HttpResponse::Ok().json(palette())
}

/// GET /api/tips
#[utoipa::path(
    get,
    path = "/api/tips",
    tag = "chat",
    responses((status = 200, description = "Rural quick tips", body = TipsResponse))
)]
#[get("/tips")]
pub async fn get_tips() -> impl Responder {
    HttpResponse::Ok().json(TipsResponse {
        featured: featured_tip().into(),
        tips: QUICK_TIPS.iter().map(|t| t.to_string()).collect(),
    })
}

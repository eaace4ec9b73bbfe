use utoipa::OpenApi;

use crate::{
    logic::toolkit::QuickAction,
    models::{
        chat::{ChatMessage, Role},
        garden::{Cell, GardenGrid},
        plant::{PaletteEntry, PlantId},
        request::{
            AnalysisResponse, CellApiResponse, CellEditResponse, ChatApiResponse,
            ChatReplyApiResponse, ChatReplyResponse, ChatRequest, ChatView, ErrorResponse,
            GridApiResponse, GridView, Link, ModeRequest, ResizeRequest, SelectionRequest,
            SessionApiResponse, SessionView, TipsResponse,
        },
        session::Mode,
        Coordinate,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agri-Sense API",
        description = "Dual-mode agricultural assistant: an urban garden-layout planner with a leaf photo check, and a rural advice chat with quick actions.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::catalog::get_palette,
        crate::api::handlers::catalog::get_tips,
        crate::api::handlers::analysis::analyze_image,
        crate::api::handlers::sessions::create_session,
        crate::api::handlers::sessions::get_session,
        crate::api::handlers::sessions::delete_session,
        crate::api::handlers::sessions::set_mode,
        crate::api::handlers::sessions::set_selection,
        crate::api::handlers::garden::get_grid,
        crate::api::handlers::garden::resize_grid,
        crate::api::handlers::garden::edit_cell,
        crate::api::handlers::garden::export,
        crate::api::handlers::chat::get_chat,
        crate::api::handlers::chat::send_prompt,
        crate::api::handlers::chat::quick_action,
    ),
    components(
        schemas(
            // Enums
            PlantId, Mode, Role, QuickAction,
            // Garden
            Coordinate, Cell, GardenGrid, PaletteEntry, GridView, CellEditResponse,
            // Requests
            ModeRequest, SelectionRequest, ResizeRequest, ChatRequest,
            // Chat
            ChatMessage, ChatView, ChatReplyResponse, TipsResponse,
            // Analysis
            AnalysisResponse,
            // Sessions
            SessionView,
            // Shared
            Link, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            SessionApiResponse,
            GridApiResponse,
            CellApiResponse,
            ChatApiResponse,
            ChatReplyApiResponse,
        )
    ),
    tags(
        (name = "sessions", description = "Per-user sessions and the Urban/Rural mode toggle"),
        (name = "garden",   description = "Garden planner: palette, grid edits and layout export"),
        (name = "analysis", description = "Leaf photo heuristic"),
        (name = "chat",     description = "Rural advice chat, quick actions and tips"),
    )
)]
pub struct ApiDoc;

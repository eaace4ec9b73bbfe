use actix_web::{get, post, web, HttpResponse};

use crate::{
    error::ApiError,
    logic::toolkit::QuickAction,
    models::{
        request::{
            session_links, ApiResponse, ChatApiResponse, ChatReplyApiResponse, ChatReplyResponse,
            ChatRequest, ChatView, ErrorResponse,
        },
        session::SessionId,
    },
    store::SessionStore,
};

/// GET /api/sessions/{id}/chat
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/chat",
    tag = "chat",
    params(("id" = u64, Path, description = "Session id")),
    responses(
        (status = 200, description = "Conversation so far", body = ChatApiResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[get("/sessions/{id}/chat")]
pub async fn get_chat(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let view = store.with_session(id, |s| Ok(ChatView::from(&s.chat)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(view, session_links(id))))
}

/// POST /api/sessions/{id}/chat
/// Records the prompt and the assistant's canned reply.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/chat",
    tag = "chat",
    params(("id" = u64, Path, description = "Session id")),
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply and updated conversation", body = ChatReplyApiResponse),
        (status = 400, description = "Blank prompt", body = ErrorResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
#[post("/sessions/{id}/chat")]
pub async fn send_prompt(
    store: web::Data<SessionStore>,
    path: web::Path<SessionId>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let prompt = body.into_inner().prompt;
    let response = store.with_session(id, |s| {
        let reply = s.send(&prompt)?;
        Ok(ChatReplyResponse {
            reply: reply.into(),
            chat: ChatView::from(&s.chat),
        })
    })?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(response, session_links(id))))
}

/// POST /api/sessions/{id}/chat/quick-actions/{action}
/// Restarts the conversation from a toolkit preset question.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/chat/quick-actions/{action}",
    tag = "chat",
    params(
        ("id" = u64, Path, description = "Session id"),
        ("action" = String, Path, description = "pest-solutions, fertilizer-advice or seasonal-crops"),
    ),
    responses(
        (status = 200, description = "Conversation restarted", body = ChatApiResponse),
        (status = 404, description = "Unknown session or action", body = ErrorResponse),
    )
)]
#[post("/sessions/{id}/chat/quick-actions/{action}")]
pub async fn quick_action(
    store: web::Data<SessionStore>,
    path: web::Path<(SessionId, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, action) = path.into_inner();
    let action: QuickAction = action.parse()?;
    let view = store.with_session(id, |s| {
        action.apply(&mut s.chat);
        Ok(ChatView::from(&s.chat))
    })?;
    log::debug!("session {id} chat restarted with {}", action.slug());
    Ok(HttpResponse::Ok().json(ApiResponse::new(view, session_links(id))))
}

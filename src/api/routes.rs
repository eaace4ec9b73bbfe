use actix_web::web;

use crate::api::handlers::{analysis, catalog, chat, garden, sessions};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(catalog::get_palette)
            .service(catalog::get_tips)
            .service(analysis::analyze_image)
            .service(sessions::create_session)
            .service(sessions::get_session)
            .service(sessions::delete_session)
            .service(sessions::set_mode)
            .service(sessions::set_selection)
            .service(garden::get_grid)
            .service(garden::resize_grid)
            .service(garden::edit_cell)
            .service(garden::export)
            .service(chat::get_chat)
            .service(chat::send_prompt)
            .service(chat::quick_action),
    );
}

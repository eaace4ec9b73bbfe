use actix_web::{middleware, web, App, HttpServer};
use agri_sense::{
    api::openapi::ApiDoc, config::AppConfig, models::request::ErrorResponse, store::SessionStore,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let bind_addr = config.bind_addr.clone();
    let max_upload_bytes = config.max_upload_bytes;
    let store = web::Data::new(SessionStore::new(config.session_defaults));
    let openapi = ApiDoc::openapi();

    log::info!("🌱 Agri-Sense API started at http://{bind_addr}");
    log::info!("   GET    /api/palette");
    log::info!("   GET    /api/tips");
    log::info!("   POST   /api/analyze");
    log::info!("   POST   /api/sessions");
    log::info!("   GET    /api/sessions/{{id}}  (mode, selection, grid, layout, chat below)");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .configure(agri_sense::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest().json(ErrorResponse { error: message }),
                )
                .into()
            }))
    })
    .bind(&bind_addr)?
    .run()
    .await
}

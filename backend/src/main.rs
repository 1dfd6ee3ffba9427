mod config;
mod database;
mod error;
mod services;

use crate::config::Config;
use crate::error::AppError;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Request bodies above this size are refused.
const JSON_LIMIT: usize = 1024 * 1024;

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// JSON extractor settings; undecodable bodies get the API's failure shape.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();

    let db = database::connect_db(&config.database_url);
    if !db.is_connected() {
        warn!("Starting without a database connection");
    }
    if let Some(token) = &config.admin_token {
        if let Err(e) = db.register_token(token).await {
            warn!("Could not register ADMIN_TOKEN: {}", e);
        }
    }

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(json_config())
            .app_data(web::Data::new(db.clone()))
            .service(services::soil::configure_routes())
            .service(services::auth::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::http::header::ContentType;
use actix_web::{dev::Server, route, web, App, HttpResponse, HttpServer, Responder};
use tracing::{debug, error, warn};

use crate::domain::error::AppError;
use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::storage::resolve_in_dir;

pub const INDEX_PAGE: &str = "index.html";
pub const SHOW_PAGE: &str = "show.html";

pub struct HttpState {
    pub templates_dir: PathBuf,
}

#[route("/", method = "GET", method = "HEAD")]
async fn home(data: web::Data<HttpState>) -> impl Responder {
    serve_page(&data, INDEX_PAGE).await
}

#[route("/show", method = "GET", method = "HEAD")]
async fn show(data: web::Data<HttpState>) -> impl Responder {
    serve_page(&data, SHOW_PAGE).await
}

/// Return a template file verbatim
async fn serve_page(state: &HttpState, name: &str) -> HttpResponse {
    let path = match resolve_in_dir(&state.templates_dir, name) {
        Ok(path) => path,
        Err(e) => {
            error!(error = %e, "Refusing to serve page");
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            debug!(page = name, size = bytes.len(), "Serving page");
            HttpResponse::Ok().content_type(ContentType::html()).body(bytes)
        }
        Err(e) => match AppError::from(e) {
            AppError::NotFound(_) => {
                warn!(path = %path.display(), "Page not found");
                HttpResponse::NotFound().body(format!("{} not found", name))
            }
            other => {
                error!(path = %path.display(), error = %other, "Failed to read page");
                HttpResponse::InternalServerError().body(other.to_string())
            }
        },
    }
}

/// Register the page routes on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(show);
}

pub fn start_server(config: &ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState {
        templates_dir: config.templates_dir.clone(),
    });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Local tool, any origin may load the pages

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

use std::path::Path;

use actix_files::Files;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};

/// The landing page, rendered once and shared by every worker.
#[derive(Debug, Clone)]
pub struct Page {
    html: String,
}

impl Page {
    pub fn render() -> Self {
        Self { html: ui::render_page() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[get("/")]
async fn index(page: web::Data<Page>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.html().to_owned())
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("404 – not found")
}

pub fn configure(cfg: &mut web::ServiceConfig, assets: &Path) {
    cfg.service(index)
        .service(Files::new("/assets", assets))
        .default_service(web::route().to(not_found));
}

mod config;
mod export;
mod routes;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

use crate::config::SiteConfig;
use crate::routes::Page;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    let page = Page::render();

    if let Some(dir) = &config.export_dir {
        export::write_index(dir, &page)?;
        return Ok(());
    }

    let page = web::Data::new(page);
    let assets = config.assets.clone();
    log::info!("serving assets from {}", assets.display());
    log::info!("listening on http://{}:{}", config.addr, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(page.clone())
            .configure(|cfg| routes::configure(cfg, &assets))
    })
    .bind((config.addr, config.port))
    .with_context(|| format!("binding {}:{}", config.addr, config.port))?
    .run()
    .await
    .context("server stopped")
}

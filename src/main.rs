mod utils;
mod models;
mod handlers;
mod fixtures;

#[cfg(test)]
mod tests;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use crate::utils::config::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "serving {:?} contract (auth {:?}, tasks {:?}) on {}:{}",
        settings.variant,
        settings.auth_mode,
        settings.task_listing,
        settings.host,
        settings.port
    );

    let bind_address = settings.bind_address();
    let settings = web::Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(|cfg| handlers::init_routes(cfg, &settings))
    })
    .bind(bind_address)?
    .run()
    .await
}

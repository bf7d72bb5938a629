use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use sqlx::postgres::PgPoolOptions;

use wallet_api::config::Config;
use wallet_api::middleware::error_dispatch;
use wallet_api::{AppState, routes};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let state = web::Data::new(AppState::new(Arc::new(pool)));

    tracing::info!("Listening on {}", config.server_url);

    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::from_fn(error_dispatch))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes::config)
    })
    .bind(&config.server_url)?
    .run();

    http_server.await?;

    Ok(())
}

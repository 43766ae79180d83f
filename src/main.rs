// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, build the places service, start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;
mod views;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{Config, SearchArea};
use dotenv::dotenv;
use services::{KakaoLocalClient, PlaceService};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting lunch-roulette...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the places service once; every request shares it
    let area = SearchArea::default();
    log::info!(
        "Searching {}m around ({}, {})",
        area.radius_meters,
        area.longitude(),
        area.latitude()
    );
    let place_service = web::Data::new(PlaceService::new(
        KakaoLocalClient::new(
            config.kakao_rest_api_key.clone(),
            config.kakao_base_url.clone(),
        ),
        area,
    ));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(place_service.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::lunch_config)
            .configure(handlers::pages_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}

mod config;
mod state;
mod database;
mod models;
mod services;
mod controllers;
mod repositories;
mod routes;
mod dto;
mod middleware;
mod utils;

use anyhow::Result;
use axum::{extract::State, routing::get, response::Json, Router};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, error};
use dotenvy::dotenv;
use serde_json::json;

use config::environment::EnvironmentConfig;
use database::connection::{create_pool, mask_database_url};
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚗 Plate Catalog - Catálogo de matrículas en venta");
    info!("==================================================");

    // Inicializar base de datos
    info!("🗄️  Conectando a {}", mask_database_url(&config.database_url));
    let pool = match create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Crear router de la API
    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/plates", routes::plate_routes::create_plate_router())
        .layer(cors_middleware())
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints MVC - Plates:");
    info!("   GET  /api/plates - Listar matrículas (page, sort_order, filter)");
    info!("   GET  /api/plates/new - Formulario vacío para alta");
    info!("   POST /api/plates - Crear matrícula");
    info!("   GET  /api/plates/:id - Obtener matrícula");
    info!("   POST /api/plates/:id/toggle-reservation - Alternar reserva");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "plate-catalog",
        "status": "healthy",
        "environment": state.config.environment,
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

use axum::{response::IntoResponse, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod artists;
mod bridge;
mod config;
mod models;
mod music_service;
mod worker;

use artists::RemoteArtistService;
use bridge::{BridgeClient, ClientOptions, Endpoint};
use config::Config;
use music_service::{Catalog, MusicService};
use worker::{Worker, WorkerError};

#[derive(Clone)]
pub struct AppState {
    artists: Arc<dyn RemoteArtistService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "music_worker=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let endpoint = Endpoint::new(&config.endpoint_name);

    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) if e.is_not_found() => {
            tracing::warn!(
                "Catalog {} not found - serving an empty music library",
                config.catalog_path.display()
            );
            Catalog::default()
        }
        Err(e) => return Err(e.into()),
    };
    if catalog.is_empty() {
        tracing::warn!("Music library is empty - artist lookups will return 404");
    } else {
        info!("Music library has {} songs", catalog.len());
    }

    let _music_service = bridge::serve(
        &config.service_name,
        endpoint.clone(),
        Arc::new(MusicService::new(catalog)),
    );

    let client = BridgeClient::new(ClientOptions {
        service: config.service_name.clone(),
        endpoint,
    });
    info!("Bridge client bound to {}", client.service());
    let state = AppState {
        artists: Arc::new(client),
    };

    let app = build_app(state)?;

    info!("listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(state: AppState) -> Result<Router, WorkerError> {
    let mut worker = Worker::new();
    worker.get("/health", health)?;
    artists::register(&mut worker)?;
    info!("Registered {} routes", worker.routes().len());
    Ok(worker.into_router().with_state(state))
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

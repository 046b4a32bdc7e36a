//! Contact resolution server.
//!
//! Parses a free-form address, geocodes it, and returns ranked
//! public-service contacts per category.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use madoguchi::address::parse_address;
use madoguchi::geocode::{ChainGeocoder, Geocoder, HttpGeocoder, TableGeocoder};
use madoguchi::models::{Category, ContactResult, GeoPoint, Region};
use madoguchi::resolve::Resolver;
use madoguchi::Directory;

mod config;
use config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Public-service contact resolution server")]
struct Args {
    /// Config file (TOML); defaults apply when absent
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Override the listen address from the config
    #[arg(short, long)]
    listen: Option<String>,
}

/// Application state shared across handlers
struct AppState {
    directory: Arc<Directory>,
    geocoder: Arc<dyn Geocoder>,
    resolver: Resolver,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::load_from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    info!("Madoguchi contact resolution server");

    let directory = Arc::new(Directory::load(&config.directory_file)?);

    let mut chain: Vec<Arc<dyn Geocoder>> = Vec::new();
    if let Some(path) = &config.landmark_file {
        if path.exists() {
            chain.push(Arc::new(TableGeocoder::load(path)?));
        } else {
            info!("No landmark table at {}, skipping", path.display());
        }
    }
    if !config.offline {
        chain.push(Arc::new(HttpGeocoder::new(
            config.geocoder_endpoint.as_deref(),
        )?));
    }
    let geocoder: Arc<dyn Geocoder> = Arc::new(ChainGeocoder::new(chain));

    let resolver = Resolver::new(
        Arc::clone(&directory),
        Arc::clone(&geocoder),
        config.resolver.clone(),
    );

    let state = Arc::new(AppState {
        directory,
        geocoder,
        resolver,
    });

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/contacts", get(contacts_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", config.listen);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        facilities: state.directory.facility_count(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    facilities: usize,
}

#[derive(Deserialize)]
struct ContactsQueryParams {
    /// Free-form postal address
    address: String,
}

#[derive(Serialize)]
struct ContactsResponse {
    address: String,
    region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    coord: Option<GeoPoint>,
    contacts: BTreeMap<Category, Vec<ContactResult>>,
}

/// Resolve contacts for a free-form address.
///
/// Unparseable components and failed geocoding degrade the ranking rather
/// than failing the request; the response always carries every category key.
async fn contacts_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ContactsQueryParams>,
) -> Result<Json<ContactsResponse>, (StatusCode, String)> {
    if params.address.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "address must not be empty".into()));
    }

    let region = parse_address(&params.address);
    let coord = state.geocoder.geocode(&params.address).await;
    let contacts = state.resolver.get_contacts(&region, coord).await;

    Ok(Json(ContactsResponse {
        address: params.address,
        region,
        coord,
        contacts,
    }))
}

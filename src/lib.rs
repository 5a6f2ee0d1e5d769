//! Stockroom API Library
//!
//! Order and inventory management for a small storefront.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod health;
pub mod migrator;
pub mod openapi;
pub mod request_id;
pub mod seed;
pub mod services;
pub mod validation;

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub inventory_service: services::inventory::InventoryService,
    pub order_service: services::orders::OrderService,
}

/// Service banner for the root path.
async fn service_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "stockroom-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Builds the full API route tree (everything except middleware layers).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_status))
        .nest("/inventory", handlers::inventory::inventory_routes())
        .nest("/orders", handlers::orders::order_routes())
        .nest("/health", health::health_routes())
}

pub mod config;
pub mod error;
pub mod extractor;
pub mod handlers;
pub mod model;
pub mod templates;

use std::sync::Arc;

use axum::Router;

use crate::config::Settings;
use crate::extractor::ExtractionClient;
use crate::handlers::{create_router, AppState};

/// Build the gateway application from its settings.
///
/// Fails only when the HTTP client for the scraper service cannot be
/// constructed.
pub fn app(settings: &Settings) -> Result<Router, reqwest::Error> {
    let extractor = ExtractionClient::from_settings(settings)?;
    Ok(create_router(AppState::new(Arc::new(extractor))))
}

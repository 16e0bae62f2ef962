use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{debug, error};

use crate::extractor::Extractor;
use crate::templates::{HomeTemplate, RecipeTemplate};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    extractor: Arc<dyn Extractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self { extractor }
    }
}

/// Build the gateway router.
///
/// # Routes
/// - `GET /` - home page with the URL form
/// - `GET /recipe?url=<page>` - extract the page through the scraper
///   service and render the result
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/recipe", get(recipe))
        .with_state(state)
}

async fn home() -> Response {
    HomeTemplate.into_response()
}

async fn recipe(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    // An absent url parameter means the empty string, and the first value
    // wins when the parameter repeats; the scraper service judges whether
    // the value is a usable URL.
    let url = params
        .into_iter()
        .find(|(name, _)| name == "url")
        .map(|(_, value)| value)
        .unwrap_or_default();

    debug!("Extracting recipe from {:?}", url);

    match state.extractor.extract(&url).await {
        Ok(recipe) => {
            debug!("Rendering extracted recipe {:?}", recipe.title);
            RecipeTemplate::new(recipe).into_response()
        }
        Err(err) => {
            error!("Extraction of {:?} failed: {}", url, err);
            err.into_response()
        }
    }
}

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;

use crate::model::Recipe;

/// Landing page with the URL form.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Recipe page rendered from a decoded [`Recipe`].
#[derive(Template)]
#[template(path = "recipe.html")]
pub struct RecipeTemplate {
    recipe: Recipe,
}

impl RecipeTemplate {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        render(self)
    }
}

impl IntoResponse for RecipeTemplate {
    fn into_response(self) -> Response {
        render(self)
    }
}

/// Render a template into an HTML response.
///
/// Compiled templates do not fail on well-formed recipes; should one ever
/// do, the client gets the same generic error body as any other failure.
fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Failed to render template: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "error" })),
            )
                .into_response()
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::Settings;
use crate::error::ExtractError;
use crate::model::Recipe;

/// Anything that can turn a recipe page URL into a structured [`Recipe`].
///
/// The gateway talks to the scraper service only through this trait, so
/// request handlers can be exercised against stubs.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<Recipe, ExtractError>;
}

/// HTTP client for the scraper service.
pub struct ExtractionClient {
    client: Client,
    base_url: String,
}

impl ExtractionClient {
    /// Create a client for the scraper service at `base_url`.
    ///
    /// Every outbound request carries the given timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client from loaded [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Self::new(
            settings.upstream_url.clone(),
            Duration::from_secs(settings.timeout),
        )
    }
}

#[async_trait]
impl Extractor for ExtractionClient {
    /// Ask the scraper service to extract the page at `url`.
    ///
    /// The value is forwarded untouched as a query parameter; judging
    /// whether it is a usable URL is the scraper's job. Non-success status
    /// codes are not special-cased: any completed exchange is decoded as a
    /// recipe, and a body that is not one surfaces as [`ExtractError::Decode`].
    async fn extract(&self, url: &str) -> Result<Recipe, ExtractError> {
        debug!("Requesting extraction of {:?}", url);

        let response = self
            .client
            .get(format!("{}/recipe", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;

        // Reading the body to completion also returns the connection to the
        // pool, whichever way decoding goes afterwards.
        let body = response.text().await?;
        let recipe: Recipe = serde_json::from_str(&body)?;
        debug!("{:#?}", recipe);

        Ok(recipe)
    }
}

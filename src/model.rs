use serde::Deserialize;

/// A structured recipe as returned by the scraper service.
///
/// Decoded once per request and dropped after the response is written. The
/// time fields are minutes and stay `None` when the scraper did not supply
/// them; `None` and `0` are different answers. Unknown keys in the payload
/// are ignored, so the scraper is free to grow its schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub author: String,
    pub cook_time: Option<u32>,
    pub host: String,
    pub total_time: Option<u32>,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub instructions_list: Vec<String>,
    pub language: String,
    pub site_name: String,
}

//! Recipe API client: trait, production implementation, and test mock.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// Trait for recipe API clients, enabling mockability in tests.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch one random recipe for a tag. Returns the raw response body.
    async fn random_recipe(&self, tag: &str) -> Result<String, FetchError>;
}

/// Production client for the Spoonacular random-recipe endpoint.
pub struct SpoonacularClient {
    inner: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SpoonacularClient {
    /// Create a client. The API key stays optional here; its absence is
    /// reported per-request so the run still reaches the fallback handler.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("daily-recipe/0.1 (+https://spoonacular.com/food-api)")
            .build()?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn random_recipe(&self, tag: &str) -> Result<String, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;

        let url = format!("{}/recipes/random", self.base_url);

        tracing::debug!(url = %url, tag, "fetching random recipe");
        let response = self
            .inner
            .get(&url)
            .query(&[("apiKey", api_key), ("number", "1"), ("tags", tag)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "recipe request failed");
            return Err(FetchError::RequestFailed(
                response.error_for_status().unwrap_err(),
            ));
        }

        Ok(response.text().await?)
    }
}

/// Parse a response body and return the first entry of its `recipes` list.
///
/// Fails when the body is not JSON or the list is absent or empty; both are
/// fetch failures from the pipeline's point of view.
pub fn first_recipe(body: &str) -> Result<Value, FetchError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidJson(e.to_string()))?;

    json.get("recipes")
        .and_then(Value::as_array)
        .and_then(|recipes| recipes.first())
        .cloned()
        .ok_or(FetchError::NoRecipes)
}

/// Canned response for a tag.
#[derive(Clone)]
pub enum MockResponse {
    Body(String),
    Error(String),
}

/// Mock recipe API for testing. Tags without a registered response fail,
/// which doubles as a network-down stand-in.
#[derive(Default)]
pub struct MockApi {
    responses: HashMap<String, MockResponse>,
}

impl MockApi {
    /// Create a mock with no responses; every tag fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a tag.
    pub fn with_response(mut self, tag: &str, response: MockResponse) -> Self {
        self.responses.insert(tag.to_string(), response);
        self
    }

    /// Add a body response for a tag.
    pub fn with_body(self, tag: &str, body: &str) -> Self {
        self.with_response(tag, MockResponse::Body(body.to_string()))
    }

    /// Add an error response for a tag.
    pub fn with_error(self, tag: &str, error: &str) -> Self {
        self.with_response(tag, MockResponse::Error(error.to_string()))
    }
}

#[async_trait]
impl RecipeApi for MockApi {
    async fn random_recipe(&self, tag: &str) -> Result<String, FetchError> {
        match self.responses.get(tag) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Error(e)) => Err(FetchError::Unavailable(e.clone())),
            None => Err(FetchError::Unavailable(format!(
                "No mock response for tag: {}",
                tag
            ))),
        }
    }
}

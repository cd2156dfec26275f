pub mod detail;
pub mod search;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::config::ServerConfig;
use crate::domain::{RecipeDetail, RecipeKey, RecipeSummary};

pub use detail::RecipeDetailClient;
pub use search::{RecipeSearchClient, SearchContract};

/// The recipe backend as seen by the UI.
#[async_trait]
pub trait RecipeBackend {
    /// Search recipes for a comma separated ingredient list.
    async fn search(&self, ingredients: &str) -> Result<Vec<RecipeSummary>>;

    async fn detail(&self, key: &RecipeKey) -> Result<RecipeDetail>;
}

/// reqwest-backed implementation talking to the configured server.
pub struct HttpBackend {
    search: RecipeSearchClient,
    detail: RecipeDetailClient,
}

impl HttpBackend {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("ladle/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base = base_url(&config.base_url)?;

        Ok(Self {
            search: RecipeSearchClient::new(http.clone(), &base, config.contract)?,
            detail: RecipeDetailClient::new(http, &base)?,
        })
    }
}

#[async_trait]
impl RecipeBackend for HttpBackend {
    async fn search(&self, ingredients: &str) -> Result<Vec<RecipeSummary>> {
        self.search.search(ingredients).await
    }

    async fn detail(&self, key: &RecipeKey) -> Result<RecipeDetail> {
        self.detail.fetch(key).await
    }
}

/// Parse the server base URL, making sure it ends with `/` so that
/// endpoint paths join below it instead of replacing its last segment.
pub fn base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Resolve a recipe image against the server, leaving absolute URLs alone.
pub fn resolve_image_url(base: &str, image: &str) -> Result<Url> {
    match Url::parse(image) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(base_url(base)?.join(image)?),
        Err(e) => Err(e.into()),
    }
}

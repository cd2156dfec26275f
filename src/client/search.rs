use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::app::{LadleError, Result};
use crate::domain::recipe::{
    default_tags, field_id, field_text, DEFAULT_COOK_TIME, DEFAULT_IMAGE, DEFAULT_RATING,
    DEFAULT_SERVINGS, UNTITLED,
};
use crate::domain::RecipeSummary;

/// Which request shape the search endpoint expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchContract {
    /// `POST /get_recipes` with a JSON body.
    #[default]
    Json,
    /// `GET /get_recipes?ingredients=...`.
    Legacy,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    ingredients: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Option<Vec<Value>>,
}

pub struct RecipeSearchClient {
    http: Client,
    endpoint: Url,
    contract: SearchContract,
}

impl RecipeSearchClient {
    pub fn new(http: Client, base: &Url, contract: SearchContract) -> Result<Self> {
        Ok(Self {
            http,
            endpoint: base.join("get_recipes")?,
            contract,
        })
    }

    /// Run one search. Blank input is rejected before any request is made.
    pub async fn search(&self, ingredients: &str) -> Result<Vec<RecipeSummary>> {
        if ingredients.trim().is_empty() {
            return Err(LadleError::Validation(
                "no ingredients to search for".to_string(),
            ));
        }

        let request = match self.contract {
            SearchContract::Json => self
                .http
                .post(self.endpoint.clone())
                .json(&SearchRequest { ingredients }),
            SearchContract::Legacy => {
                let mut url = self.endpoint.clone();
                url.query_pairs_mut().append_pair("ingredients", ingredients);
                self.http.get(url)
            }
        };

        debug!("Searching recipes for '{}' ({:?})", ingredients, self.contract);

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        parse_search_response(status, &body)
    }
}

/// Decode a search response body into summaries with defaults applied.
///
/// Entries are full recipe objects or, from older backends, bare names.
pub fn parse_search_response(status: StatusCode, body: &[u8]) -> Result<Vec<RecipeSummary>> {
    if !status.is_success() {
        return Err(LadleError::UnexpectedStatus(status.as_u16()));
    }

    let response: SearchResponse = serde_json::from_slice(body)?;

    let summaries = response
        .recipes
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(RecipeSummary::from_name(name)),
            Value::Object(fields) => Some(summary_from_fields(fields)),
            other => {
                warn!("Skipping unrecognised recipe entry: {}", other);
                None
            }
        })
        .collect();

    Ok(summaries)
}

fn summary_from_fields(fields: &Map<String, Value>) -> RecipeSummary {
    let tags = match fields.get("tags") {
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| field_text(Some(v), ""))
            .filter(|t| !t.is_empty())
            .collect(),
        _ => default_tags(),
    };

    RecipeSummary {
        id: field_id(fields.get("id")),
        title: field_text(fields.get("title").or_else(|| fields.get("name")), UNTITLED),
        image_url: field_text(fields.get("image"), DEFAULT_IMAGE),
        tags,
        cook_time: field_text(fields.get("cookTime"), DEFAULT_COOK_TIME),
        servings: field_text(fields.get("servings"), DEFAULT_SERVINGS),
        rating: field_text(fields.get("rating"), DEFAULT_RATING),
    }
}

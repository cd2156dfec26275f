use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::app::{LadleError, Result};
use crate::domain::{DetailContent, RecipeDetail, RecipeKey};

/// Every field either detail contract can send.
#[derive(Deserialize)]
struct DetailResponse {
    error: Option<String>,
    recipe_details: Option<String>,
    title: Option<String>,
    image: Option<String>,
    ingredients: Option<Vec<String>>,
    instructions: Option<Vec<String>>,
}

pub struct RecipeDetailClient {
    http: Client,
    endpoint: Url,
}

impl RecipeDetailClient {
    pub fn new(http: Client, base: &Url) -> Result<Self> {
        Ok(Self {
            http,
            endpoint: base.join("get_recipe_details")?,
        })
    }

    /// `/get_recipe_details/<id>` for ids, `/get_recipe_details?recipe=<name>`
    /// for names.
    pub fn url_for(&self, key: &RecipeKey) -> Result<Url> {
        let mut url = self.endpoint.clone();
        match key {
            RecipeKey::Id(id) => {
                url.path_segments_mut()
                    .map_err(|_| LadleError::Config("server URL cannot be a base".into()))?
                    .push(id);
            }
            RecipeKey::Name(name) => {
                url.query_pairs_mut().append_pair("recipe", name);
            }
        }
        Ok(url)
    }

    pub async fn fetch(&self, key: &RecipeKey) -> Result<RecipeDetail> {
        let url = self.url_for(key)?;
        debug!("Fetching recipe details from {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        parse_detail_response(status, &body, key)
    }
}

/// Decode a detail response of either shape.
///
/// A non-empty `error` field wins over everything else, including the HTTP status.
pub fn parse_detail_response(
    status: StatusCode,
    body: &[u8],
    key: &RecipeKey,
) -> Result<RecipeDetail> {
    let response: DetailResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(_) if !status.is_success() => {
            return Err(LadleError::UnexpectedStatus(status.as_u16()))
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(error) = response.error.filter(|e| !e.is_empty()) {
        return Err(LadleError::ServerReported(error));
    }
    if !status.is_success() {
        return Err(LadleError::UnexpectedStatus(status.as_u16()));
    }

    let title = response
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| key.label().to_string());

    let content = if let Some(blob) = response.recipe_details {
        DetailContent::Blob(blob)
    } else if response.ingredients.is_some() || response.instructions.is_some() {
        DetailContent::Structured {
            ingredients: response.ingredients.unwrap_or_default(),
            instructions: response.instructions.unwrap_or_default(),
        }
    } else {
        return Err(LadleError::MalformedResponse(
            "recipe details carry neither steps nor a body".to_string(),
        ));
    };

    Ok(RecipeDetail {
        title,
        image_url: response.image.filter(|i| !i.is_empty()),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RecipeDetailClient {
        let base = Url::parse("http://localhost:5000/").unwrap();
        RecipeDetailClient::new(Client::new(), &base).unwrap()
    }

    #[test]
    fn test_url_for_id_uses_path_segment() {
        let url = client().url_for(&RecipeKey::Id("42".into())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/get_recipe_details/42");
    }

    #[test]
    fn test_url_for_id_is_escaped() {
        let url = client().url_for(&RecipeKey::Id("a/b c".into())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/get_recipe_details/a%2Fb%20c");
    }

    #[test]
    fn test_url_for_name_uses_query() {
        let url = client()
            .url_for(&RecipeKey::Name("Egg Rice".into()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/get_recipe_details?recipe=Egg+Rice"
        );
    }

    #[test]
    fn test_parse_structured() {
        let body = br#"{"title":"Egg Rice","image":"egg.jpg","ingredients":["egg","rice"],
            "instructions":["Cook rice","Add egg"]}"#;
        let detail = parse_detail_response(StatusCode::OK, body, &RecipeKey::Id("1".into())).unwrap();

        assert_eq!(detail.title, "Egg Rice");
        assert_eq!(detail.image_url.as_deref(), Some("egg.jpg"));
        assert_eq!(
            detail.content,
            DetailContent::Structured {
                ingredients: vec!["egg".into(), "rice".into()],
                instructions: vec!["Cook rice".into(), "Add egg".into()],
            }
        );
    }

    #[test]
    fn test_parse_blob_takes_title_from_name() {
        let body = br#"{"recipe_details":"<p>Whisk.</p>"}"#;
        let detail =
            parse_detail_response(StatusCode::OK, body, &RecipeKey::Name("Omelette".into())).unwrap();

        assert_eq!(detail.title, "Omelette");
        assert_eq!(detail.content, DetailContent::Blob("<p>Whisk.</p>".into()));
    }

    #[test]
    fn test_parse_server_error_even_with_error_status() {
        let body = br#"{"error":"Recipe not found"}"#;
        let err = parse_detail_response(
            StatusCode::NOT_FOUND,
            body,
            &RecipeKey::Name("Nope".into()),
        )
        .unwrap_err();

        assert!(matches!(err, LadleError::ServerReported(ref m) if m == "Recipe not found"));
    }

    #[test]
    fn test_parse_empty_error_field_is_ignored() {
        let body = br#"{"error":"","recipe_details":"<p>Whisk.</p>"}"#;
        let detail =
            parse_detail_response(StatusCode::OK, body, &RecipeKey::Name("Omelette".into())).unwrap();

        assert_eq!(detail.content, DetailContent::Blob("<p>Whisk.</p>".into()));
    }

    #[test]
    fn test_parse_error_status_without_json() {
        let err = parse_detail_response(StatusCode::BAD_GATEWAY, b"bad gateway", &RecipeKey::Id("1".into()))
            .unwrap_err();
        assert!(matches!(err, LadleError::UnexpectedStatus(502)));
    }

    #[test]
    fn test_parse_empty_object_is_malformed() {
        let err = parse_detail_response(StatusCode::OK, b"{}", &RecipeKey::Id("1".into())).unwrap_err();
        assert!(err.is_transport());
    }
}

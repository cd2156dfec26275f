use ladle::app::LadleError;
use ladle::client::{HttpBackend, RecipeBackend, SearchContract};
use ladle::config::ServerConfig;
use ladle::domain::{DetailContent, RecipeKey};
use mockito::Matcher;
use serde_json::json;

fn backend(server: &mockito::Server, contract: SearchContract) -> HttpBackend {
    HttpBackend::new(&ServerConfig {
        base_url: server.url(),
        contract,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_json_search_applies_defaults() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/get_recipes")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "ingredients": "egg, rice" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"recipes":[{"id":1,"title":"Egg Rice"}]}"#)
        .create_async()
        .await;

    let recipes = backend(&server, SearchContract::Json)
        .search("egg, rice")
        .await
        .unwrap();

    m.assert_async().await;
    assert_eq!(recipes.len(), 1);
    let recipe = &recipes[0];
    assert_eq!(recipe.id.as_deref(), Some("1"));
    assert_eq!(recipe.title, "Egg Rice");
    assert_eq!(recipe.image_url, "default-recipe-image.jpg");
    assert_eq!(recipe.tags, vec!["Quick", "Easy"]);
    assert_eq!(recipe.cook_time, "30");
    assert_eq!(recipe.servings, "4");
    assert_eq!(recipe.rating, "4.5");
}

#[tokio::test]
async fn test_legacy_search_sends_query_and_accepts_names() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/get_recipes")
        .match_query(Matcher::UrlEncoded("ingredients".into(), "egg, rice".into()))
        .with_status(200)
        .with_body(r#"{"recipes":["Congee","Fried Rice"]}"#)
        .create_async()
        .await;

    let recipes = backend(&server, SearchContract::Legacy)
        .search("egg, rice")
        .await
        .unwrap();

    m.assert_async().await;
    let titles: Vec<_> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Congee", "Fried Rice"]);
    assert!(recipes.iter().all(|r| r.id.is_none()));
}

#[tokio::test]
async fn test_search_without_recipes_key_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/get_recipes")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let recipes = backend(&server, SearchContract::Json)
        .search("stone")
        .await
        .unwrap();

    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_search_non_json_body_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/get_recipes")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = backend(&server, SearchContract::Json)
        .search("egg")
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_search_server_error_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/get_recipes")
        .with_status(500)
        .create_async()
        .await;

    let err = backend(&server, SearchContract::Json)
        .search("egg")
        .await
        .unwrap_err();

    assert!(matches!(err, LadleError::UnexpectedStatus(500)));
}

#[tokio::test]
async fn test_blank_search_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/get_recipes")
        .expect(0)
        .create_async()
        .await;

    let err = backend(&server, SearchContract::Json)
        .search("   ")
        .await
        .unwrap_err();

    m.assert_async().await;
    assert!(matches!(err, LadleError::Validation(_)));
}

#[tokio::test]
async fn test_detail_by_id() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/get_recipe_details/7")
        .with_status(200)
        .with_body(
            json!({
                "title": "Egg Rice",
                "image": "egg-rice.jpg",
                "ingredients": ["2 eggs", "1 cup rice"],
                "instructions": ["Cook rice.", "Fry with eggs."]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let detail = backend(&server, SearchContract::Json)
        .detail(&RecipeKey::Id("7".into()))
        .await
        .unwrap();

    m.assert_async().await;
    assert_eq!(detail.title, "Egg Rice");
    assert_eq!(detail.image_url.as_deref(), Some("egg-rice.jpg"));
    assert_eq!(
        detail.content,
        DetailContent::Structured {
            ingredients: vec!["2 eggs".into(), "1 cup rice".into()],
            instructions: vec!["Cook rice.".into(), "Fry with eggs.".into()],
        }
    );
}

#[tokio::test]
async fn test_detail_by_name_returns_blob() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get_recipe_details")
        .match_query(Matcher::UrlEncoded("recipe".into(), "Congee".into()))
        .with_status(200)
        .with_body(r#"{"recipe_details":"<p>Simmer rice.</p>"}"#)
        .create_async()
        .await;

    let detail = backend(&server, SearchContract::Legacy)
        .detail(&RecipeKey::Name("Congee".into()))
        .await
        .unwrap();

    assert_eq!(detail.title, "Congee");
    assert_eq!(detail.content, DetailContent::Blob("<p>Simmer rice.</p>".into()));
}

#[tokio::test]
async fn test_detail_server_error_message_is_kept() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/get_recipe_details")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"Recipe not found"}"#)
        .create_async()
        .await;

    let err = backend(&server, SearchContract::Json)
        .detail(&RecipeKey::Name("Nothing".into()))
        .await
        .unwrap_err();

    assert!(!err.is_transport());
    assert_eq!(err.to_string(), "Recipe not found");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 1, so the connection is refused.
    let backend = HttpBackend::new(&ServerConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        contract: SearchContract::Json,
        timeout_secs: 5,
    })
    .unwrap();

    let err = backend.search("egg").await.unwrap_err();
    assert!(matches!(err, LadleError::Http(_)));
    assert!(err.is_transport());

    let err = backend.detail(&RecipeKey::Id("1".into())).await.unwrap_err();
    assert!(err.is_transport());
}

use std::io::Write;

use tracing::warn;

use crate::app::{AppContext, Result};
use crate::controller::{MSG_DETAIL_FAILED, MSG_EMPTY_INPUT, MSG_NO_RECIPES, MSG_SEARCH_FAILED};
use crate::domain::{IngredientSet, RecipeDetail, RecipeKey, RecipeSummary};

/// Build an ingredient set from command-line words. Each argument may hold
/// several comma separated ingredients.
pub fn ingredients_from_args(args: &[String]) -> IngredientSet {
    let mut set = IngredientSet::new();
    for part in args.iter().flat_map(|arg| arg.split(',')) {
        set.add(part);
    }
    set
}

pub async fn search(ctx: &AppContext, args: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    search_to(ctx, args, &mut stdout.lock()).await
}

pub async fn search_to(ctx: &AppContext, args: &[String], out: &mut impl Write) -> Result<()> {
    let ingredients = ingredients_from_args(args);
    if ingredients.is_empty() {
        writeln!(out, "{}", MSG_EMPTY_INPUT)?;
        return Ok(());
    }

    match ctx.backend.search(&ingredients.to_query_payload()).await {
        Ok(recipes) if recipes.is_empty() => writeln!(out, "{}", MSG_NO_RECIPES)?,
        Ok(recipes) => {
            match recipes.len() {
                1 => writeln!(out, "Found 1 recipe\n")?,
                n => writeln!(out, "Found {} recipes\n", n)?,
            }
            for recipe in &recipes {
                write_card(out, recipe)?;
            }
        }
        Err(e) => {
            warn!("Search for {:?} failed: {}", ingredients.to_query_payload(), e);
            writeln!(out, "{}", MSG_SEARCH_FAILED)?;
        }
    }

    Ok(())
}

fn write_card(out: &mut impl Write, recipe: &RecipeSummary) -> Result<()> {
    match &recipe.id {
        Some(id) => writeln!(out, "{}  [{}]", recipe.title, id)?,
        None => writeln!(out, "{}", recipe.title)?,
    }
    writeln!(
        out,
        "  {} min  ·  {} servings  ·  ★ {}",
        recipe.cook_time, recipe.servings, recipe.rating
    )?;
    let tags: Vec<String> = recipe.tags.iter().map(|t| format!("#{}", t)).collect();
    writeln!(out, "  {}", tags.join(" "))?;
    writeln!(out)?;
    Ok(())
}

pub async fn show(ctx: &AppContext, key: RecipeKey) -> Result<()> {
    let stdout = std::io::stdout();
    show_to(ctx, key, &mut stdout.lock()).await
}

pub async fn show_to(ctx: &AppContext, key: RecipeKey, out: &mut impl Write) -> Result<()> {
    match ctx.backend.detail(&key).await {
        Ok(detail) => write_detail(out, &detail)?,
        Err(e) if e.is_transport() => {
            warn!("Detail fetch for {} failed: {}", key.label(), e);
            writeln!(out, "{}", MSG_DETAIL_FAILED)?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn write_detail(out: &mut impl Write, detail: &RecipeDetail) -> Result<()> {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "{}", "=".repeat(detail.title.chars().count()))?;
    if let Some(image) = &detail.image_url {
        writeln!(out, "Image: {}", image)?;
    }
    writeln!(out)?;
    for line in detail.body_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::app::LadleError;
    use crate::client::RecipeBackend;
    use crate::config::Config;
    use crate::domain::DetailContent;

    #[derive(Default)]
    struct StubBackend {
        recipes: Vec<RecipeSummary>,
        fail: Option<fn() -> LadleError>,
        searched: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RecipeBackend for StubBackend {
        async fn search(&self, ingredients: &str) -> Result<Vec<RecipeSummary>> {
            self.searched.lock().unwrap().push(ingredients.to_string());
            match self.fail {
                Some(err) => Err(err()),
                None => Ok(self.recipes.clone()),
            }
        }

        async fn detail(&self, key: &RecipeKey) -> Result<RecipeDetail> {
            if let Some(err) = self.fail {
                return Err(err());
            }
            Ok(RecipeDetail {
                title: key.label().to_string(),
                image_url: Some("egg-rice.jpg".into()),
                content: DetailContent::Structured {
                    ingredients: vec!["2 eggs".into()],
                    instructions: vec!["Fry.".into()],
                },
            })
        }
    }

    fn context(backend: StubBackend) -> (AppContext, Arc<StubBackend>) {
        let backend = Arc::new(backend);
        let ctx = AppContext::with_backend(Config::default(), backend.clone());
        (ctx, backend)
    }

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ingredients_from_args_splits_commas() {
        let set = ingredients_from_args(&args(&["egg,rice", " scallion ", "egg", ","]));
        assert_eq!(set.to_query_payload(), "egg, rice, scallion");
    }

    #[tokio::test]
    async fn test_search_with_no_ingredients_skips_backend() {
        let (ctx, backend) = context(StubBackend::default());
        let mut out = Vec::new();

        search_to(&ctx, &args(&[" ", ","]), &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap().trim(), MSG_EMPTY_INPUT);
        assert!(backend.searched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_prints_cards() {
        let (ctx, backend) = context(StubBackend {
            recipes: vec![RecipeSummary::from_name("Egg Rice")],
            ..Default::default()
        });
        let mut out = Vec::new();

        search_to(&ctx, &args(&["egg", "rice"]), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(backend.searched.lock().unwrap().as_slice(), ["egg, rice"]);
        assert!(text.starts_with("Found 1 recipe\n"));
        assert!(text.contains("Egg Rice\n  30 min  ·  4 servings  ·  ★ 4.5\n  #Quick #Easy"));
    }

    #[tokio::test]
    async fn test_search_reports_empty_and_failed() {
        let (ctx, _) = context(StubBackend::default());
        let mut out = Vec::new();
        search_to(&ctx, &args(&["egg"]), &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), MSG_NO_RECIPES);

        let (ctx, _) = context(StubBackend {
            fail: Some(|| LadleError::UnexpectedStatus(500)),
            ..Default::default()
        });
        let mut out = Vec::new();
        search_to(&ctx, &args(&["egg"]), &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), MSG_SEARCH_FAILED);
    }

    #[tokio::test]
    async fn test_show_prints_detail() {
        let (ctx, _) = context(StubBackend::default());
        let mut out = Vec::new();

        show_to(&ctx, RecipeKey::Name("Egg Rice".into()), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Egg Rice\n========\nImage: egg-rice.jpg\n"));
        assert!(text.contains("  • 2 eggs"));
        assert!(text.contains("  1. Fry."));
    }

    #[tokio::test]
    async fn test_show_prints_server_message_verbatim() {
        let (ctx, _) = context(StubBackend {
            fail: Some(|| LadleError::ServerReported("Recipe not found".into())),
            ..Default::default()
        });
        let mut out = Vec::new();

        show_to(&ctx, RecipeKey::Id("9".into()), &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap().trim(), "Recipe not found");
    }
}

pub mod ingredient;
pub mod notification;
pub mod recipe;

pub use ingredient::IngredientSet;
pub use notification::{Notification, Severity};
pub use recipe::{DetailContent, RecipeDetail, RecipeKey, RecipeSummary};

mod recipe;

pub use recipe::{RecipeIngredientView, RecipeView, TagView};

use std::ops::Deref;

#[derive(Clone)]
pub struct Query(pub foodgram_shared::State);

impl Deref for Query {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod create;
mod import;
mod ingredient;
mod tag;

pub use create::{CreateInput, IngredientAmountInput};
pub use ingredient::IngredientInput;
pub use tag::TagInput;

use std::ops::Deref;

#[derive(Clone)]
pub struct Command(pub foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

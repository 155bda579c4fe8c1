use std::path::PathBuf;

use foodgram::Config;
use foodgram_recipe::IngredientInput;

/// Loads `name,measurement_unit` rows into the catalogue.
#[tracing::instrument(skip(config))]
pub async fn load(config: &Config, path: PathBuf) -> anyhow::Result<()> {
    let inputs: Vec<IngredientInput> = foodgram::data::read_rows(&path).await?;
    let total = inputs.len();

    let pool = foodgram::db::create_pool(&config.database.url, 1).await?;
    let command = foodgram_recipe::Command(foodgram_shared::State::single(pool.clone()));
    let created = command.load_ingredients(inputs).await?;
    pool.close().await;

    tracing::info!("{created} of {total} ingredients created from {}", path.display());

    Ok(())
}

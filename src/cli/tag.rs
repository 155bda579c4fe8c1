use std::path::PathBuf;

use foodgram::Config;
use foodgram_recipe::TagInput;

/// Loads `name,color,slug` rows, or the default meal tags when no file is given.
#[tracing::instrument(skip(config))]
pub async fn load(config: &Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let inputs: Vec<TagInput> = match &path {
        Some(path) => foodgram::data::read_rows(path).await?,
        None => TagInput::defaults(),
    };
    let total = inputs.len();

    let pool = foodgram::db::create_pool(&config.database.url, 1).await?;
    let command = foodgram_recipe::Command(foodgram_shared::State::single(pool.clone()));
    let created = command.load_tags(inputs).await?;
    pool.close().await;

    tracing::info!("{created} of {total} tags created");

    Ok(())
}

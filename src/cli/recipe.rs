use std::path::PathBuf;

use foodgram::Config;
use foodgram_recipe::CreateInput;

#[tracing::instrument(skip(config))]
pub async fn import(config: &Config, author: String, path: PathBuf) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&path).await?;
    let inputs: Vec<CreateInput> = serde_json::from_str(&content)?;

    let pool = foodgram::db::create_pool(&config.database.url, 1).await?;
    let command = foodgram_recipe::Command(foodgram_shared::State::single(pool.clone()));
    let ids = command.import(inputs, author).await?;
    pool.close().await;

    for id in &ids {
        tracing::debug!(recipe = id, "Recipe imported");
    }

    tracing::info!("{} recipes imported from {}", ids.len(), path.display());

    Ok(())
}

use foodgram_recipe::{IngredientInput, TagInput};
use foodgram_shared::State;
use temp_dir::TempDir;

async fn setup_state(dir: &TempDir) -> anyhow::Result<State> {
    let path = dir.child("db.sqlite3");
    let pool = foodgram::db::create_pool(&format!("sqlite:{}", path.display()), 1).await?;
    foodgram::db::migrate(&pool).await?;

    Ok(State::single(pool))
}

#[tokio::test]
async fn test_load_ingredients_from_csv_with_duplicate_row() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = setup_state(&dir).await?;

    let csv = dir.child("ingredients.csv");
    tokio::fs::write(&csv, "соль,г\nсоль,г\n").await?;

    let inputs: Vec<IngredientInput> = foodgram::data::read_rows(&csv).await?;
    assert_eq!(inputs.len(), 2);

    let created = foodgram_recipe::Command(state)
        .load_ingredients(inputs)
        .await?;
    assert_eq!(created, 1);

    Ok(())
}

#[tokio::test]
async fn test_load_tags_from_csv() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = setup_state(&dir).await?;

    let csv = dir.child("tags.csv");
    tokio::fs::write(&csv, "Brunch,#ffffff,brunch\nЗавтрак,#b3ffa3,breakfast\n").await?;

    let command = foodgram_recipe::Command(state);
    command.load_tags(TagInput::defaults()).await?;

    let inputs: Vec<TagInput> = foodgram::data::read_rows(&csv).await?;
    assert_eq!(command.load_tags(inputs).await?, 1);

    Ok(())
}

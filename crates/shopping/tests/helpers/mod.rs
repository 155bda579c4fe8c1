use foodgram_recipe::{CreateInput, IngredientAmountInput, IngredientInput};
use foodgram_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use temp_dir::TempDir;

pub async fn setup_test_state(dir: &TempDir) -> anyhow::Result<State> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    let state = State::single(pool);
    foodgram_recipe::Command(state.clone())
        .load_ingredients(
            [
                ("flour", "g"),
                ("milk", "ml"),
                ("milk", "cup"),
                ("egg", "pcs"),
                ("sugar", "g"),
                ("butter", "g"),
            ]
            .into_iter()
            .map(|(name, unit)| IngredientInput {
                name: name.to_owned(),
                measurement_unit: unit.to_owned(),
            })
            .collect(),
        )
        .await?;

    Ok(state)
}

pub async fn create_recipe(
    state: &State,
    title: &str,
    ingredients: &[(&str, &str, u32)],
) -> anyhow::Result<String> {
    let input = CreateInput {
        title: title.to_owned(),
        text: format!("How to cook {title}"),
        cooking_time: 15,
        ingredients: ingredients
            .iter()
            .map(|(name, unit, amount)| IngredientAmountInput {
                name: (*name).to_owned(),
                measurement_unit: (*unit).to_owned(),
                amount: *amount,
            })
            .collect(),
        tags: vec![],
    };

    Ok(foodgram_recipe::Command(state.clone())
        .create(input, "author")
        .await?)
}

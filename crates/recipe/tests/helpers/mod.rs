use foodgram_recipe::{Command, CreateInput, IngredientAmountInput, IngredientInput, TagInput};
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

    Ok(State::single(pool))
}

pub async fn load_pantry(command: &Command) -> anyhow::Result<()> {
    command
        .load_ingredients(vec![
            ingredient("flour", "g"),
            ingredient("milk", "ml"),
            ingredient("egg", "pcs"),
            ingredient("sugar", "g"),
        ])
        .await?;
    command.load_tags(TagInput::defaults()).await?;

    Ok(())
}

pub fn ingredient(name: &str, measurement_unit: &str) -> IngredientInput {
    IngredientInput {
        name: name.to_owned(),
        measurement_unit: measurement_unit.to_owned(),
    }
}

pub fn amount(name: &str, measurement_unit: &str, amount: u32) -> IngredientAmountInput {
    IngredientAmountInput {
        name: name.to_owned(),
        measurement_unit: measurement_unit.to_owned(),
        amount,
    }
}

pub fn pancakes() -> CreateInput {
    CreateInput {
        title: "Pancakes".to_owned(),
        text: "Mix everything and fry.".to_owned(),
        cooking_time: 20,
        ingredients: vec![
            amount("flour", "g", 200),
            amount("milk", "ml", 300),
            amount("egg", "pcs", 2),
        ],
        tags: vec![],
    }
}

use foodgram_db::table::Ingredient;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

/// One row of the ingredient catalogue, as shipped in `ingredients.json`.
#[derive(Validate, Deserialize, Clone, Debug)]
pub struct IngredientInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub measurement_unit: String,
}

impl super::Command {
    /// Inserts every `(name, measurement_unit)` pair not already present and
    /// returns how many rows were created. Existing pairs are left untouched.
    pub async fn load_ingredients(
        &self,
        inputs: Vec<IngredientInput>,
    ) -> foodgram_shared::Result<u64> {
        for input in &inputs {
            input.validate()?;
        }

        let mut tx = self.write_db.begin().await?;
        let mut created = 0;

        for input in inputs {
            let statement = Query::insert()
                .into_table(Ingredient::Table)
                .columns([
                    Ingredient::Id,
                    Ingredient::Name,
                    Ingredient::MeasurementUnit,
                ])
                .values_panic([
                    Ulid::new().to_string().into(),
                    input.name.into(),
                    input.measurement_unit.into(),
                ])
                .on_conflict(
                    OnConflict::columns([Ingredient::Name, Ingredient::MeasurementUnit])
                        .do_nothing()
                        .to_owned(),
                )
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            created += sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        tracing::info!(created, "ingredients loaded");

        Ok(created)
    }
}

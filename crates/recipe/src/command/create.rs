use std::collections::HashSet;

use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient, RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, Clone, Debug)]
pub struct IngredientAmountInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub measurement_unit: String,
    #[validate(range(min = 1))]
    pub amount: u32,
}

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(range(min = 1))]
    pub cooking_time: u32,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<IngredientAmountInput>,
    /// Tag slugs
    #[serde(default)]
    pub tags: Vec<String>,
}

impl super::Command {
    pub async fn create(
        &self,
        input: CreateInput,
        request_by: impl Into<String>,
    ) -> foodgram_shared::Result<String> {
        input.validate()?;

        let author_id: String = request_by.into();
        let mut seen = HashSet::new();
        for ingredient in &input.ingredients {
            if !seen.insert((&ingredient.name, &ingredient.measurement_unit)) {
                foodgram_shared::user!(
                    "ingredient {} ({}) is listed twice",
                    ingredient.name,
                    ingredient.measurement_unit
                );
            }
        }

        let mut amounts = Vec::with_capacity(input.ingredients.len());
        for ingredient in &input.ingredients {
            let Some(ingredient_id) = self
                .find_ingredient_id(&ingredient.name, &ingredient.measurement_unit)
                .await?
            else {
                foodgram_shared::user!(
                    "unknown ingredient {} ({})",
                    ingredient.name,
                    ingredient.measurement_unit
                );
            };

            amounts.push((ingredient_id, ingredient.amount));
        }

        let mut tag_ids = Vec::with_capacity(input.tags.len());
        for slug in &input.tags {
            let Some(tag_id) = self.find_tag_id(slug).await? else {
                foodgram_shared::user!("unknown tag {slug}");
            };

            if tag_ids.contains(&tag_id) {
                foodgram_shared::user!("tag {slug} is listed twice");
            }

            tag_ids.push(tag_id);
        }

        let id = Ulid::new().to_string();
        let mut tx = self.write_db.begin().await?;

        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::AuthorId,
                Recipe::Title,
                Recipe::Text,
                Recipe::CookingTime,
                Recipe::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                author_id.into(),
                input.title.into(),
                input.text.into(),
                input.cooking_time.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let mut statement = Query::insert()
            .into_table(RecipeIngredient::Table)
            .columns([
                RecipeIngredient::RecipeId,
                RecipeIngredient::IngredientId,
                RecipeIngredient::Amount,
                RecipeIngredient::Position,
            ])
            .to_owned();

        for (position, (ingredient_id, amount)) in amounts.into_iter().enumerate() {
            statement.values_panic([
                id.to_owned().into(),
                ingredient_id.into(),
                amount.into(),
                u32::try_from(position)?.into(),
            ]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !tag_ids.is_empty() {
            let mut statement = Query::insert()
                .into_table(RecipeTag::Table)
                .columns([RecipeTag::RecipeId, RecipeTag::TagId])
                .to_owned();

            for tag_id in tag_ids {
                statement.values_panic([id.to_owned().into(), tag_id.into()]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(id)
    }

    async fn find_ingredient_id(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> foodgram_shared::Result<Option<String>> {
        let statement = Query::select()
            .column(Ingredient::Id)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Name).eq(name))
            .and_where(Expr::col(Ingredient::MeasurementUnit).eq(measurement_unit))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        Ok(row.map(|(id,)| id))
    }

    async fn find_tag_id(&self, slug: &str) -> foodgram_shared::Result<Option<String>> {
        let statement = Query::select()
            .column(Tag::Id)
            .from(Tag::Table)
            .and_where(Expr::col(Tag::Slug).eq(slug))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        Ok(row.map(|(id,)| id))
    }
}

use std::ops::Deref;

use foodgram_db::table::{Recipe, ShoppingCart};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;
use time::OffsetDateTime;

#[derive(Clone)]
pub struct Command(pub foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Short form of a recipe returned once it lands in the cart.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub cooking_time: u32,
}

impl Command {
    pub async fn add(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> foodgram_shared::Result<RecipeSummary> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();

        let statement = Query::select()
            .columns([Recipe::Id, Recipe::Title, Recipe::CookingTime])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&recipe_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(summary) = sqlx::query_as_with::<_, RecipeSummary, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            foodgram_shared::not_found!("recipe {recipe_id}");
        };

        let statement = Query::insert()
            .into_table(ShoppingCart::Table)
            .columns([
                ShoppingCart::UserId,
                ShoppingCart::RecipeId,
                ShoppingCart::CreatedAt,
            ])
            .values_panic([
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([ShoppingCart::UserId, ShoppingCart::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("recipe already in shopping cart");
        }

        tracing::info!(user_id, recipe_id, "recipe added to shopping cart");

        Ok(summary)
    }

    pub async fn remove(
        &self,
        user_id: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let user_id = user_id.into();
        let recipe_id = recipe_id.into();

        let statement = Query::delete()
            .from_table(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::UserId).eq(&user_id))
            .and_where(Expr::col(ShoppingCart::RecipeId).eq(&recipe_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            foodgram_shared::user!("recipe already removed");
        }

        tracing::info!(user_id, recipe_id, "recipe removed from shopping cart");

        Ok(())
    }
}

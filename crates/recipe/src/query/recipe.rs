use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient, RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, JoinType, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RecipeView {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub text: String,
    pub cooking_time: u32,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RecipeIngredientView {
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TagView {
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl super::Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> foodgram_shared::Result<Option<RecipeView>> {
        let statement = sea_query::Query::select()
            .columns([
                Recipe::Id,
                Recipe::AuthorId,
                Recipe::Title,
                Recipe::Text,
                Recipe::CookingTime,
                Recipe::CreatedAt,
            ])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Ingredient amounts of a recipe in the order they were declared.
    pub async fn ingredients(
        &self,
        recipe_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<RecipeIngredientView>> {
        let statement = sea_query::Query::select()
            .column((Ingredient::Table, Ingredient::Name))
            .column((Ingredient::Table, Ingredient::MeasurementUnit))
            .column((RecipeIngredient::Table, RecipeIngredient::Amount))
            .from(RecipeIngredient::Table)
            .join(
                JoinType::InnerJoin,
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                    .eq(recipe_id.into()),
            )
            .order_by((RecipeIngredient::Table, RecipeIngredient::Position), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    /// Tags of a recipe in the order they were given.
    pub async fn tags(
        &self,
        recipe_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<TagView>> {
        let statement = sea_query::Query::select()
            .column((Tag::Table, Tag::Name))
            .column((Tag::Table, Tag::Color))
            .column((Tag::Table, Tag::Slug))
            .from(RecipeTag::Table)
            .join(
                JoinType::InnerJoin,
                Tag::Table,
                Expr::col((Tag::Table, Tag::Id)).equals((RecipeTag::Table, RecipeTag::TagId)),
            )
            .and_where(
                Expr::col((RecipeTag::Table, RecipeTag::RecipeId)).eq(recipe_id.into()),
            )
            .order_by((RecipeTag::Table, RecipeTag::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}

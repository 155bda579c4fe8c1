use std::{collections::HashMap, ops::Deref};

use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient, ShoppingCart};
use sea_query::{Expr, ExprTrait, JoinType, Order, Query as Select, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

use crate::{LineItem, MergePolicy, QueuedRecipe, ShoppingReport};

#[derive(Clone)]
pub struct Query(pub foodgram_shared::State);

impl Deref for Query {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(FromRow)]
struct LineItemRow {
    recipe_id: String,
    name: Option<String>,
    measurement_unit: Option<String>,
    amount: u32,
}

impl Query {
    pub async fn has_queued(&self, user_id: impl Into<String>) -> foodgram_shared::Result<bool> {
        let statement = Select::select()
            .column(ShoppingCart::Id)
            .from(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::UserId).eq(user_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }

    /// Fails with a user error when the cart has nothing to download.
    pub async fn ensure_queued(&self, user_id: impl Into<String>) -> foodgram_shared::Result<()> {
        if !self.has_queued(user_id).await? {
            foodgram_shared::user!("Shopping cart is empty");
        }

        Ok(())
    }

    /// Recipes in the order they were added to the cart, each with its line
    /// items in declaration order.
    pub async fn queued_recipes(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<QueuedRecipe>> {
        let statement = Select::select()
            .column((Recipe::Table, Recipe::Id))
            .column((Recipe::Table, Recipe::Title))
            .from(ShoppingCart::Table)
            .join(
                JoinType::InnerJoin,
                Recipe::Table,
                Expr::col((Recipe::Table, Recipe::Id))
                    .equals((ShoppingCart::Table, ShoppingCart::RecipeId)),
            )
            .and_where(
                Expr::col((ShoppingCart::Table, ShoppingCart::UserId)).eq(user_id.into()),
            )
            .order_by((ShoppingCart::Table, ShoppingCart::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let recipes = sqlx::query_as_with::<_, (String, String), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        if recipes.is_empty() {
            return Ok(vec![]);
        }

        let statement = Select::select()
            .column((RecipeIngredient::Table, RecipeIngredient::RecipeId))
            .column((Ingredient::Table, Ingredient::Name))
            .column((Ingredient::Table, Ingredient::MeasurementUnit))
            .column((RecipeIngredient::Table, RecipeIngredient::Amount))
            .from(RecipeIngredient::Table)
            .join(
                JoinType::LeftJoin,
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                    .is_in(recipes.iter().map(|(id, _)| id.to_owned())),
            )
            .order_by((RecipeIngredient::Table, RecipeIngredient::Position), Order::Asc)
            .order_by((RecipeIngredient::Table, RecipeIngredient::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, LineItemRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut line_items: HashMap<String, Vec<LineItem>> = HashMap::new();
        for row in rows {
            let (Some(name), Some(unit)) = (row.name, row.measurement_unit) else {
                tracing::warn!(
                    recipe_id = row.recipe_id,
                    "line item without ingredient skipped"
                );
                continue;
            };

            line_items
                .entry(row.recipe_id)
                .or_default()
                .push(LineItem::new(name, unit, row.amount));
        }

        Ok(recipes
            .into_iter()
            .map(|(id, title)| QueuedRecipe {
                line_items: line_items.remove(&id).unwrap_or_default(),
                id,
                title,
            })
            .collect())
    }

    /// Aggregated shopping list for everything in the user's cart.
    pub async fn report(
        &self,
        user_id: impl Into<String>,
        policy: MergePolicy,
    ) -> foodgram_shared::Result<ShoppingReport> {
        let recipes = self.queued_recipes(user_id).await?;

        Ok(ShoppingReport::build(&recipes, policy))
    }
}

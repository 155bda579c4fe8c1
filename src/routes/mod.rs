use axum::{
    Router,
    routing::{get, post},
};
use foodgram_shopping::MergePolicy;
use sqlx::SqlitePool;

mod health;
mod shopping;
mod user;

pub use user::{CurrentUser, USER_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub shopping_command: foodgram_shopping::Command,
    pub shopping_query: foodgram_shopping::Query,
    pub merge_policy: MergePolicy,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: foodgram_shared::State, merge_policy: MergePolicy) -> Self {
        Self {
            pool: state.read_db.clone(),
            shopping_command: foodgram_shopping::Command(state.clone()),
            shopping_query: foodgram_shopping::Query(state),
            merge_policy,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/recipes/download_shopping_cart",
            get(shopping::download),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(shopping::add).delete(shopping::remove),
        )
        .with_state(app_state)
}

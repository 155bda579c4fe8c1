use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use foodgram::AppState;
use foodgram_recipe::{CreateInput, IngredientAmountInput, IngredientInput};
use foodgram_shared::State;
use foodgram_shopping::MergePolicy;
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: State,
    pub router: Router,
}

pub async fn setup_test_app(dir: &TempDir, merge_policy: MergePolicy) -> anyhow::Result<TestApp> {
    let path = dir.child("db.sqlite3");
    let pool = foodgram::db::create_pool(&format!("sqlite:{}", path.display()), 1).await?;
    foodgram::db::migrate(&pool).await?;

    let state = State::single(pool);
    foodgram_recipe::Command(state.clone())
        .load_ingredients(
            [("flour", "g"), ("milk", "ml"), ("milk", "cup"), ("egg", "pcs")]
                .into_iter()
                .map(|(name, unit)| IngredientInput {
                    name: name.to_owned(),
                    measurement_unit: unit.to_owned(),
                })
                .collect(),
        )
        .await?;

    Ok(TestApp {
        router: foodgram::router(AppState::new(state.clone(), merge_policy)),
        state,
    })
}

impl TestApp {
    pub async fn create_recipe(
        &self,
        title: &str,
        ingredients: &[(&str, &str, u32)],
    ) -> anyhow::Result<String> {
        let input = CreateInput {
            title: title.to_owned(),
            text: format!("How to cook {title}"),
            cooking_time: 10,
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

        Ok(foodgram_recipe::Command(self.state.clone())
            .create(input, "author")
            .await?)
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        user: Option<&str>,
    ) -> anyhow::Result<Response<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(foodgram::routes::USER_ID_HEADER, user);
        }

        Ok(self
            .router
            .clone()
            .oneshot(builder.body(Body::empty())?)
            .await?)
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

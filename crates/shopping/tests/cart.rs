mod helpers;

use foodgram_shared::Error;
use temp_dir::TempDir;

#[tokio::test]
async fn test_add_returns_summary() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_shopping::Command(state.clone());
    let query = foodgram_shopping::Query(state.clone());
    let recipe = helpers::create_recipe(&state, "Pancakes", &[("flour", "g", 200)]).await?;

    assert!(!query.has_queued("john").await?);

    let summary = command.add("john", &recipe).await?;
    assert_eq!(summary.id, recipe);
    assert_eq!(summary.title, "Pancakes");
    assert_eq!(summary.cooking_time, 15);

    assert!(query.has_queued("john").await?);
    assert!(!query.has_queued("jane").await?);

    Ok(())
}

#[tokio::test]
async fn test_add_twice() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_shopping::Command(state.clone());
    let recipe = helpers::create_recipe(&state, "Pancakes", &[("flour", "g", 200)]).await?;

    command.add("john", &recipe).await?;
    let err = command.add("john", &recipe).await.unwrap_err();

    assert!(matches!(err, Error::User(ref msg) if msg == "recipe already in shopping cart"));

    command.add("jane", &recipe).await?;

    Ok(())
}

#[tokio::test]
async fn test_add_unknown_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_shopping::Command(state);

    let err = command.add("john", "missing").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_remove() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_shopping::Command(state.clone());
    let query = foodgram_shopping::Query(state.clone());
    let recipe = helpers::create_recipe(&state, "Pancakes", &[("flour", "g", 200)]).await?;

    let err = command.remove("john", &recipe).await.unwrap_err();
    assert!(matches!(err, Error::User(ref msg) if msg == "recipe already removed"));

    command.add("john", &recipe).await?;
    command.remove("john", &recipe).await?;
    assert!(!query.has_queued("john").await?);

    let err = command.remove("john", &recipe).await.unwrap_err();
    assert!(matches!(err, Error::User(_)));

    Ok(())
}

#[tokio::test]
async fn test_ensure_queued() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_shopping::Command(state.clone());
    let query = foodgram_shopping::Query(state.clone());
    let recipe = helpers::create_recipe(&state, "Pancakes", &[("flour", "g", 200)]).await?;

    let err = query.ensure_queued("john").await.unwrap_err();
    assert!(matches!(err, Error::User(ref msg) if msg == "Shopping cart is empty"));

    command.add("john", &recipe).await?;
    query.ensure_queued("john").await?;

    Ok(())
}

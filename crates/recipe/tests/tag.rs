mod helpers;

use foodgram_recipe::TagInput;
use foodgram_shared::Error;
use temp_dir::TempDir;

#[tokio::test]
async fn test_load_tags_skips_existing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_recipe::Command(state);

    assert_eq!(command.load_tags(TagInput::defaults()).await?, 3);
    assert_eq!(command.load_tags(TagInput::defaults()).await?, 0);

    let created = command
        .load_tags(vec![
            TagInput::new("Brunch", "#ffffff", "brunch"),
            TagInput::new("Lunch", "#ffbfa3", "lunch"),
        ])
        .await?;
    assert_eq!(created, 1);

    Ok(())
}

#[tokio::test]
async fn test_load_tags_rejects_long_color() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_recipe::Command(state);

    let err = command
        .load_tags(vec![TagInput::new("Supper", "##a6a3ff", "supper")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    Ok(())
}

#[tokio::test]
async fn test_create_with_tags() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_recipe::Command(state.clone());
    let query = foodgram_recipe::Query(state);
    helpers::load_pantry(&command).await?;

    let mut input = helpers::pancakes();
    input.tags = vec!["supper".to_owned(), "breakfast".to_owned()];
    let id = command.create(input, "john").await?;

    let slugs = query
        .tags(&id)
        .await?
        .into_iter()
        .map(|tag| tag.slug)
        .collect::<Vec<_>>();
    assert_eq!(slugs, vec!["supper", "breakfast"]);

    Ok(())
}

#[tokio::test]
async fn test_create_with_unknown_tag() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(&dir).await?;
    let command = foodgram_recipe::Command(state.clone());
    helpers::load_pantry(&command).await?;

    let mut input = helpers::pancakes();
    input.tags = vec!["brunch".to_owned()];
    let err = command.create(input, "john").await.unwrap_err();
    assert!(matches!(err, Error::User(ref msg) if msg == "unknown tag brunch"));

    let mut input = helpers::pancakes();
    input.tags = vec!["dinner".to_owned(), "dinner".to_owned()];
    let err = command.create(input, "john").await.unwrap_err();
    assert!(matches!(err, Error::User(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipe")
        .fetch_one(&state.read_db)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

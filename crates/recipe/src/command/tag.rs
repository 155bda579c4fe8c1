use foodgram_db::table::Tag;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct TagInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1, max = 7))]
    pub color: String,
    #[validate(length(min = 1, max = 64), custom(function = "validate_slug"))]
    pub slug: String,
}

impl TagInput {
    pub fn new(name: &str, color: &str, slug: &str) -> Self {
        Self {
            name: name.to_owned(),
            color: color.to_owned(),
            slug: slug.to_owned(),
        }
    }

    /// Meal tags every fresh install starts with.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Завтрак", "#b3ffa3", "breakfast"),
            Self::new("Обед", "#ffbfa3", "dinner"),
            Self::new("Ужин", "#a6a3ff", "supper"),
        ]
    }
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Ok(());
    }

    Err(ValidationError::new("slug"))
}

impl super::Command {
    /// Inserts tags whose name, color and slug are all unused and returns how
    /// many rows were created.
    pub async fn load_tags(&self, inputs: Vec<TagInput>) -> foodgram_shared::Result<u64> {
        for input in &inputs {
            input.validate()?;
        }

        let mut tx = self.write_db.begin().await?;
        let mut created = 0;

        for input in inputs {
            let statement = Query::insert()
                .into_table(Tag::Table)
                .columns([Tag::Id, Tag::Name, Tag::Color, Tag::Slug])
                .values_panic([
                    Ulid::new().to_string().into(),
                    input.name.into(),
                    input.color.into(),
                    input.slug.into(),
                ])
                .on_conflict(OnConflict::new().do_nothing().to_owned())
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            created += sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        tracing::info!(created, "tags loaded");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_ascii_words() {
        assert!(TagInput::new("Brunch", "#ffffff", "late-brunch_2").validate().is_ok());
    }

    #[test]
    fn slug_rejects_spaces_and_symbols() {
        assert!(TagInput::new("Brunch", "#ffffff", "late brunch").validate().is_err());
        assert!(TagInput::new("Brunch", "#ffffff", "brunch!").validate().is_err());
    }

    #[test]
    fn default_tags_are_valid() {
        for tag in TagInput::defaults() {
            assert!(tag.validate().is_ok(), "{} should be valid", tag.slug);
        }
    }
}

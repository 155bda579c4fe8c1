//! Seed files for the catalogue commands.
//!
//! CSV files have no header row and list fields in declaration order, e.g.
//! `name,measurement_unit` for ingredients. Files ending in `.json` hold an
//! array of objects instead.

use std::path::Path;

use serde::de::DeserializeOwned;

pub fn parse_rows<T: DeserializeOwned>(path: &Path, content: &str) -> anyhow::Result<Vec<T>> {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        return Ok(serde_json::from_str(content)?);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    reader
        .deserialize()
        .map(|row| row.map_err(Into::into))
        .collect()
}

pub async fn read_rows<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = tokio::fs::read_to_string(path).await?;

    parse_rows(path, &content)
}

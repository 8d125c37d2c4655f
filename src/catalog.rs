//! Movie records and the catalog loaded from the JSON snapshot.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{error, info};

use crate::error::CatalogError;

/// Identifier as stored in the snapshot. Some sources write numbers, some
/// strings; lookups always go through [`MovieId::as_text`].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MovieId(Value);

impl MovieId {
    pub fn as_text(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Number(n) => number_text(n),
            other => other.to_string(),
        }
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId(Value::String(id.to_owned()))
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        MovieId(Value::from(id))
    }
}

// Integral floats print without the trailing ".0" so `12.0` and "12" agree.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Accepts text, numbers and booleans as their text form; `null` is absent.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text or a number, got {other}"
        ))),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MovieRecord {
    #[serde(
        rename = "Title",
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(rename = "Movie_ID", default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<MovieId>,
    #[serde(
        rename = "Metascore",
        default,
        deserialize_with = "loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub metascore: Option<String>,
    /// Year, genre, cast and whatever else the snapshot carries.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    pub fn id_text(&self) -> Option<String> {
        self.movie_id.as_ref().map(MovieId::as_text)
    }
}

/// The movies loaded at startup, in snapshot order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn from_records(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let bytes = fs::read(path).await.map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let movies: Vec<MovieRecord> =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Catalog::from_records(movies))
    }

    /// Loads the snapshot, serving an empty catalog if it cannot be read.
    pub async fn load_or_empty(path: impl AsRef<Path>) -> Catalog {
        match Catalog::load(path.as_ref()).await {
            Ok(catalog) => {
                info!(
                    path = %path.as_ref().display(),
                    movies = catalog.len(),
                    "loaded movie catalog"
                );
                catalog
            }
            Err(err) => {
                error!(error = %err, "failed to load movies data, serving an empty catalog");
                Catalog::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&MovieRecord> {
        self.movies.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[MovieRecord] {
        &self.movies
    }
}

#![forbid(unsafe_code)]

//! Movie catalog backing the dashboard rows.
//!
//! The catalog is a JSON array of OMDb-style movie records. Every dashboard
//! row shows the same list, so the catalog's length fixes the item count of
//! each row and [`Catalog::grid_model`] turns it into the navigation grid.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tvnav_core::{Cell, GridModel};

/// One movie record as shipped in the catalog JSON.
///
/// Keys keep the upstream capitalization (`Title`, `imdbRating`, ...).
/// Only `id` and `Title` are required; missing text fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Rated", default)]
    pub rated: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Writer", default)]
    pub writer: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Language", default)]
    pub language: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Awards", default)]
    pub awards: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Metascore", default)]
    pub metascore: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Response", default)]
    pub response: String,
}

impl Movie {
    /// IMDb rating as a number; `None` for `"N/A"` or missing ratings.
    #[must_use]
    pub fn rating(&self) -> Option<f32> {
        self.imdb_rating.trim().parse().ok()
    }

    /// Genres split on commas.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre.split(',').map(str::trim).filter(|g| !g.is_empty())
    }
}

/// Ordered list of movies shown on every dashboard row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    #[must_use]
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let movies = serde_json::from_str(json)?;
        Ok(Self { movies })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let movies = serde_json::from_reader(reader)?;
        Ok(Self { movies })
    }

    /// Load a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), movies = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog file, falling back to an empty catalog on any error.
    ///
    /// The dashboard still comes up (search field only) when the bundled
    /// list is missing or malformed.
    #[must_use]
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "catalog unavailable, continuing with an empty list");
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Navigation grid with `rows` rows over this list.
    #[must_use]
    pub fn grid_model(&self, rows: usize) -> GridModel {
        GridModel::uniform(rows, self.movies.len())
    }

    /// Movie shown at `cell`. Rows share one list, so only the column
    /// matters; the search field shows no movie.
    #[must_use]
    pub fn movie_at(&self, cell: Cell) -> Option<&Movie> {
        self.movies.get(cell.column()?)
    }

    /// Movies whose title contains `query`, ignoring case. An empty or
    /// blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        self.movies
            .iter()
            .filter(|m| needle.is_empty() || m.title.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Catalog could not be loaded.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    Io { path: PathBuf, source: io::Error },
    /// The JSON was malformed or did not match the record layout.
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read catalog {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "invalid catalog JSON: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

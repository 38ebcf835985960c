//! Movie catalog models.

use crate::error::RentalError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Pricing category of a movie.
///
/// Serialized as its lowercase code: `regular`, `new`, `childrens`.
/// Parsing, from text or through serde, ignores case and surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MovieCategory {
    /// Catalog titles: flat base price for the first two days.
    #[serde(rename = "regular")]
    Regular,

    /// Recent releases: charged per day, bonus point for longer rentals.
    #[serde(rename = "new")]
    NewRelease,

    /// Children's titles: flat base price for the first three days.
    #[serde(rename = "childrens")]
    Childrens,
}

impl MovieCategory {
    /// Every category, in declaration order.
    pub const ALL: [MovieCategory; 3] = [
        MovieCategory::Regular,
        MovieCategory::NewRelease,
        MovieCategory::Childrens,
    ];

    /// Returns the catalog code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            MovieCategory::Regular => "regular",
            MovieCategory::NewRelease => "new",
            MovieCategory::Childrens => "childrens",
        }
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MovieCategory {
    type Err = RentalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        MovieCategory::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| RentalError::InvalidCategory(s.trim().to_string()))
    }
}

impl TryFrom<String> for MovieCategory {
    type Error = RentalError;

    fn try_from(code: String) -> std::result::Result<Self, Self::Error> {
        code.parse()
    }
}

/// A title available for rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,

    #[serde(alias = "code")]
    pub category: MovieCategory,
}

impl Movie {
    pub fn new(title: impl Into<String>, category: MovieCategory) -> Self {
        Movie {
            title: title.into(),
            category,
        }
    }
}

/// Movies indexed by their catalog identifier.
///
/// Supplied wholesale to the statement generator, which only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieCatalog {
    movies: HashMap<String, Movie>,
}

impl MovieCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MovieCatalog {
            movies: HashMap::new(),
        }
    }

    /// Adds or replaces the movie stored under `id`.
    pub fn insert(&mut self, id: impl Into<String>, movie: Movie) -> Option<Movie> {
        self.movies.insert(id.into(), movie)
    }

    /// Looks up a movie by identifier.
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Movie)> for MovieCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Movie)>>(iter: I) -> Self {
        MovieCatalog {
            movies: iter.into_iter().map(|(id, movie)| (id.into(), movie)).collect(),
        }
    }
}

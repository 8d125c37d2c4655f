//! Read-only lookups over the loaded [`Catalog`].

use crate::catalog::{Catalog, MovieRecord};
use crate::error::QueryError;

impl Catalog {
    /// Movie at a zero-based position taken straight from the URL.
    pub fn movie_at(&self, index: &str) -> Result<&MovieRecord, QueryError> {
        leading_position(index)
            .and_then(|position| self.get(position))
            .ok_or_else(|| QueryError::PositionNotFound {
                index: index.to_owned(),
            })
    }

    /// First movie whose identifier text equals `id` exactly.
    pub fn movie_by_id(&self, id: &str) -> Result<&MovieRecord, QueryError> {
        self.iter()
            .find(|movie| movie.id_text().as_deref() == Some(id))
            .ok_or_else(|| QueryError::IdNotFound { id: id.to_owned() })
    }

    /// Case-insensitive title substring search, in catalog order.
    ///
    /// An empty result is not an error; only a missing or empty query is.
    pub fn search_by_title(&self, query: Option<&str>) -> Result<Vec<&MovieRecord>, QueryError> {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Err(QueryError::MissingTitle),
        };

        Ok(self
            .iter()
            .filter(|movie| {
                movie
                    .title
                    .as_ref()
                    .map(|title| title.to_lowercase().contains(&query))
                    .unwrap_or(false)
            })
            .collect())
    }
}

/// Reads the leading decimal number of a path segment, ignoring whatever
/// follows it (`"2abc"` and `"2.5"` are both 2). Leading whitespace and a
/// sign are allowed; negative values other than zero are rejected.
fn leading_position(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let position: usize = rest[..digits_end].parse().ok()?;
    if negative && position != 0 {
        return None;
    }
    Some(position)
}

/// Whether a metascore counts as an actual score.
///
/// Absent, blank and `N/A` (any case) all mean "no score".
pub fn has_quality_score(metascore: Option<&str>) -> bool {
    match metascore.map(str::trim) {
        None => false,
        Some(score) => !score.is_empty() && !score.eq_ignore_ascii_case("N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieId;
    use pretty_assertions::assert_eq;

    fn movie(id: impl Into<MovieId>, title: &str) -> MovieRecord {
        MovieRecord {
            title: Some(title.to_owned()),
            movie_id: Some(id.into()),
            ..MovieRecord::default()
        }
    }

    fn titles(movies: &[&MovieRecord]) -> Vec<String> {
        movies.iter().filter_map(|m| m.title.clone()).collect()
    }

    fn sample() -> Catalog {
        Catalog::from_records(vec![
            movie(1_i64, "The Matrix"),
            movie("2", "Matrix Reloaded"),
            movie(3_i64, "Inception"),
        ])
    }

    #[test]
    fn movie_at_accepts_every_valid_position() {
        let catalog = sample();
        for (i, expected) in catalog.as_slice().iter().enumerate() {
            assert_eq!(catalog.movie_at(&i.to_string()), Ok(expected));
        }
    }

    #[test]
    fn movie_at_rejects_anything_else() {
        let catalog = sample();
        for index in ["3", "100", "-1", "-2abc", "abc", "", " ", "+", "-", ".5", "x1"] {
            assert_eq!(
                catalog.movie_at(index),
                Err(QueryError::PositionNotFound {
                    index: index.to_owned()
                }),
                "index {index:?}"
            );
        }
    }

    #[test]
    fn movie_at_reads_only_the_leading_number() {
        let catalog = sample();
        let cases = [
            ("1.0", 1),
            ("1abc", 1),
            (" 1", 1),
            ("\t2", 2),
            ("+2", 2),
            ("-0", 0),
            ("002", 2),
            ("2 x", 2),
        ];
        for (index, position) in cases {
            assert_eq!(
                catalog.movie_at(index),
                Ok(&catalog.as_slice()[position]),
                "index {index:?}"
            );
        }
    }

    #[test]
    fn movie_by_id_compares_text() {
        let catalog = sample();
        assert_eq!(
            catalog.movie_by_id("1").unwrap().title.as_deref(),
            Some("The Matrix")
        );
        assert_eq!(
            catalog.movie_by_id("2").unwrap().title.as_deref(),
            Some("Matrix Reloaded")
        );
        assert_eq!(
            catalog.movie_by_id("01"),
            Err(QueryError::IdNotFound { id: "01".into() })
        );
    }

    #[test]
    fn movie_by_id_finds_every_record() {
        let catalog = sample();
        for movie in catalog.iter() {
            let id = movie.id_text().unwrap();
            assert_eq!(catalog.movie_by_id(&id).unwrap().id_text(), Some(id));
        }
    }

    #[test]
    fn movie_by_id_prefers_the_first_duplicate() {
        let catalog = Catalog::from_records(vec![
            movie(5_i64, "Original"),
            movie("5", "Remake"),
        ]);
        assert_eq!(
            catalog.movie_by_id("5").unwrap().title.as_deref(),
            Some("Original")
        );
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let catalog = sample();
        let found = catalog.search_by_title(Some("matrix")).unwrap();
        assert_eq!(titles(&found), vec!["The Matrix", "Matrix Reloaded"]);

        let found = catalog.search_by_title(Some("INCEP")).unwrap();
        assert_eq!(titles(&found), vec!["Inception"]);
    }

    #[test]
    fn search_requires_a_query() {
        let catalog = sample();
        assert_eq!(catalog.search_by_title(None), Err(QueryError::MissingTitle));
        assert_eq!(catalog.search_by_title(Some("")), Err(QueryError::MissingTitle));
    }

    #[test]
    fn search_without_matches_is_empty() {
        let catalog = sample();
        assert!(catalog.search_by_title(Some("Dune")).unwrap().is_empty());
    }

    #[test]
    fn search_skips_untitled_records_and_keeps_whitespace() {
        let catalog = Catalog::from_records(vec![
            MovieRecord::default(),
            movie(1_i64, "Matrix Reloaded"),
            movie(2_i64, "The Matrix"),
        ]);
        let found = catalog.search_by_title(Some(" matrix")).unwrap();
        assert_eq!(titles(&found), vec!["The Matrix"]);
    }

    #[test]
    fn empty_catalog_answers_every_query() {
        let catalog = Catalog::default();
        assert!(catalog.movie_at("0").is_err());
        assert!(catalog.movie_by_id("1").is_err());
        assert!(catalog.search_by_title(Some("a")).unwrap().is_empty());
    }

    #[test]
    fn quality_score_truth_table() {
        assert!(!has_quality_score(None));
        assert!(!has_quality_score(Some("")));
        assert!(!has_quality_score(Some("   ")));
        assert!(!has_quality_score(Some("N/A")));
        assert!(!has_quality_score(Some("n/a")));
        assert!(!has_quality_score(Some(" N/A ")));
        assert!(has_quality_score(Some("75")));
        assert!(has_quality_score(Some("tbd")));
    }
}

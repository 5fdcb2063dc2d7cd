//! Movie domain model and search result pages.
//!
//! This module defines the core `Movie` type deserialized from catalog search
//! responses, together with the `SearchPage` envelope that carries one page of
//! results plus pagination totals. Both types mirror the wire format of the
//! TMDB `/search/movie` endpoint, so responses deserialize directly into them.

use chrono::Datelike;
use serde::Deserialize;

/// Date format used by the catalog for release dates.
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single movie as returned by a catalog search.
///
/// Only the fields the application presents are kept. Image fields hold the
/// catalog's relative paths (for example `/abc123.jpg`) and must be resolved
/// into full URLs with [`crate::catalog::resolve_image`]. The release date is
/// the raw `YYYY-MM-DD` string from the catalog; it may be absent or empty for
/// unreleased or obscure titles.
///
/// # Fields
///
/// - `id`: Stable catalog identifier
/// - `title`: Display title
/// - `overview`: Plot summary, possibly empty
/// - `release_date`: Release date as `YYYY-MM-DD`, `None` when unknown
/// - `vote_average`: Aggregate rating on a 0 to 10 scale
/// - `poster_path`: Relative poster image path, `None` when missing
/// - `backdrop_path`: Relative backdrop image path, `None` when missing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl Movie {
    /// Returns the release year, when the release date is present and parses.
    ///
    /// The catalog occasionally sends an empty string instead of omitting the
    /// field; both cases yield `None`.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?.trim();
        if date.is_empty() {
            return None;
        }
        chrono::NaiveDate::parse_from_str(date, RELEASE_DATE_FORMAT)
            .ok()
            .map(|parsed| parsed.year())
    }

    /// Returns the rating formatted for display, e.g. `7.8/10`.
    ///
    /// The raw `vote_average` is rounded to one decimal place.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }
}

/// One page of search results with pagination totals.
///
/// Matches the envelope of the catalog's search response: the page number that
/// was served, the result list, and the totals across all pages. `total_pages`
/// and `total_results` are zero when the query matched nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchPage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_date(release_date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "The Batman".to_string(),
            overview: String::new(),
            release_date: release_date.map(str::to_string),
            vote_average: 7.75,
            poster_path: None,
            backdrop_path: None,
        }
    }

    #[test]
    fn release_year_parsed_from_full_date() {
        assert_eq!(movie_with_date(Some("2022-03-01")).release_year(), Some(2022));
    }

    #[test]
    fn release_year_absent_for_missing_or_empty_date() {
        assert_eq!(movie_with_date(None).release_year(), None);
        assert_eq!(movie_with_date(Some("")).release_year(), None);
        assert_eq!(movie_with_date(Some("soon")).release_year(), None);
    }

    #[test]
    fn rating_label_rounds_to_one_decimal() {
        assert_eq!(movie_with_date(None).rating_label(), "7.8/10");
    }

    #[test]
    fn search_page_deserializes_catalog_payload() {
        let payload = serde_json::json!({
            "page": 1,
            "results": [
                {
                    "id": 414906,
                    "title": "The Batman",
                    "overview": "In his second year of fighting crime...",
                    "release_date": "2022-03-01",
                    "vote_average": 7.677,
                    "poster_path": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                    "backdrop_path": null,
                    "popularity": 123.4
                }
            ],
            "total_pages": 7,
            "total_results": 130
        });

        let page: SearchPage = serde_json::from_value(payload).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 414_906);
        assert_eq!(page.results[0].backdrop_path, None);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn movie_tolerates_sparse_payload() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Untitled Project"
        }))
        .unwrap();
        assert_eq!(movie.overview, "");
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.rating_label(), "0.0/10");
    }
}

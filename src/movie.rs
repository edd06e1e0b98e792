// Movie records as returned by TMDB list endpoints, and the bordered block
// used to show one of them in the terminal.

use serde::Deserialize;

pub const PLACEHOLDER: &str = "N/A";
pub const NO_OVERVIEW: &str = "No description available.";

/// One entry of a `results` array. Only `title` is guaranteed; the service
/// sends empty strings or omits the other fields for obscure titles.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Envelope shared by `/discover/movie` and `/search/movie`. A body
/// without `results` is malformed, not an empty listing.
#[derive(Deserialize, Debug)]
pub struct ResultsPage {
    pub results: Vec<Movie>,
}

impl Movie {
    /// Four character year prefix of the release date.
    pub fn year(&self) -> Option<&str> {
        let date = non_empty(self.release_date.as_deref())?;
        Some(date.get(..4).unwrap_or(date))
    }

    /// The average vote as the service sent it. Whole numbers keep one
    /// decimal so `8` still reads as `8.0`.
    pub fn rating(&self) -> Option<String> {
        self.vote_average.map(|v| {
            if v.fract() == 0.0 {
                format!("{v:.1}")
            } else {
                format!("{v}")
            }
        })
    }

    pub fn synopsis(&self) -> Option<&str> {
        non_empty(self.overview.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Render a movie as a block framed by `=` rules of `width` characters.
/// Missing optional fields fall back to fixed placeholders.
pub fn format_record(movie: &Movie, width: usize) -> String {
    let rule = "=".repeat(width);
    let year = movie.year().unwrap_or(PLACEHOLDER);
    let rating = movie.rating().unwrap_or_else(|| PLACEHOLDER.to_string());
    let synopsis = movie.synopsis().unwrap_or(NO_OVERVIEW);

    format!(
        "\n{rule}\n{title} ({year})\n{rule}\nRating: {rating}/10\n\n{synopsis}\n{rule}",
        title = movie.title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(release_date: Option<&str>, vote_average: Option<f64>, overview: Option<&str>) -> Movie {
        Movie {
            title: "Heat".into(),
            release_date: release_date.map(String::from),
            vote_average,
            overview: overview.map(String::from),
        }
    }

    #[test]
    fn full_record_layout() {
        let m = movie(Some("1995-12-15"), Some(7.9), Some("A cop chases a thief."));
        let rule = "=".repeat(70);
        let expected = format!(
            "\n{rule}\nHeat (1995)\n{rule}\nRating: 7.9/10\n\nA cop chases a thief.\n{rule}"
        );
        assert_eq!(format_record(&m, 70), expected);
    }

    #[test]
    fn every_subset_of_missing_fields_renders() {
        for mask in 0..8u8 {
            let m = movie(
                (mask & 1 == 0).then_some("2001-01-01"),
                (mask & 2 == 0).then_some(6.25),
                (mask & 4 == 0).then_some("Plot."),
            );
            let text = format_record(&m, 10);
            assert!(text.contains("Heat ("));

            if mask & 1 != 0 {
                assert!(text.contains("Heat (N/A)"));
            } else {
                assert!(text.contains("Heat (2001)"));
            }
            if mask & 2 != 0 {
                assert!(text.contains("Rating: N/A/10"));
            } else {
                assert!(text.contains("Rating: 6.25/10"));
            }
            if mask & 4 != 0 {
                assert!(text.contains(NO_OVERVIEW));
            } else {
                assert!(text.contains("\nPlot.\n"));
            }
        }
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let m = movie(Some(""), None, Some("  "));
        assert_eq!(m.year(), None);
        assert_eq!(m.synopsis(), None);
        let text = format_record(&m, 5);
        assert!(text.contains("Heat (N/A)"));
        assert!(text.contains(NO_OVERVIEW));
    }

    #[test]
    fn short_date_is_kept_whole() {
        let m = movie(Some("199"), None, None);
        assert_eq!(m.year(), Some("199"));
    }

    #[test]
    fn rule_width_is_respected() {
        let text = format_record(&movie(None, None, None), 3);
        assert!(text.starts_with("\n===\n"));
        assert!(text.ends_with("\n==="));
    }

    #[test]
    fn decodes_sparse_json() {
        let body = r#"{"page":1,"results":[
            {"title":"Alien","release_date":"1979-05-25","vote_average":8.1,"overview":"In space."},
            {"title":"Unknown","vote_average":null}
        ]}"#;
        let page: ResultsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].year(), Some("1979"));
        assert_eq!(page.results[1].release_date, None);
        assert_eq!(page.results[1].rating(), None);
    }

    #[test]
    fn rating_keeps_full_precision() {
        let text = format_record(&movie(None, Some(7.125), None), 10);
        assert!(text.contains("Rating: 7.125/10"), "{text}");
        assert_eq!(movie(None, Some(8.0), None).rating().as_deref(), Some("8.0"));
        assert_eq!(movie(None, Some(0.0), None).rating().as_deref(), Some("0.0"));
    }

    #[test]
    fn missing_results_field_is_rejected() {
        assert!(serde_json::from_str::<ResultsPage>("{}").is_err());
        assert!(serde_json::from_str::<ResultsPage>(r#"{"page":1}"#).is_err());
        let empty: ResultsPage = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(empty.results.is_empty());
    }
}

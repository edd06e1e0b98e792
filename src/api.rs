// API client module: a small blocking HTTP client for the TMDB v3 API,
// behind the `MovieSource` trait so the menu loop can run against a fake.

use rand::Rng;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::{Config, Tuning};
use crate::error::TransportError;
use crate::movie::{Movie, ResultsPage};
use crate::query::{Filter, Query};

/// Anything that can answer a built query with a list of movies.
pub trait MovieSource {
    fn get(&self, query: &Query) -> Result<Vec<Movie>, TransportError>;
}

/// Holds a reqwest blocking client, the base URL of the TMDB API and the
/// api key appended to every request.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a client from an already loaded `Config`.
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(TmdbClient {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl MovieSource for TmdbClient {
    /// GET `{base_url}{endpoint}` with the query parameters plus `api_key`.
    /// Non-2xx statuses and bodies that don't decode are errors.
    fn get(&self, query: &Query) -> Result<Vec<Movie>, TransportError> {
        let url = format!("{}{}", self.base_url, query.endpoint.path());
        debug!(%url, params = ?query.params, "requesting movies");

        let res = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&query.params)
            .send()?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            warn!(status = status.as_u16(), "movie service rejected request");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = res.text()?;
        let page: ResultsPage =
            serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))?;
        debug!(count = page.results.len(), "received candidates");
        Ok(page.results)
    }
}

/// Build the query for `filter` and run it against `source`.
pub fn fetch_candidates<S, R>(
    source: &S,
    filter: &Filter,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<Vec<Movie>, TransportError>
where
    S: MovieSource + ?Sized,
    R: Rng,
{
    let query = Query::build(filter, tuning, rng);
    source.get(&query).inspect_err(|e| warn!(error = %e, "fetching candidates failed"))
}

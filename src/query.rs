// Turns a user-level filter into the endpoint and query string of one TMDB
// request. The credential is not part of the query; the transport adds it.

use rand::Rng;

use crate::config::Tuning;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    ByCategory(u32),
    ByText(String),
    UnfilteredPopular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Discover,
    Search,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Discover => "/discover/movie",
            Endpoint::Search => "/search/movie",
        }
    }
}

/// A fully parameterized request, minus the api key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl Query {
    /// Discovery queries sort by popularity, apply a vote-count floor and
    /// land on a random page in `1..=tuning.max_page`. Text search sends
    /// the query string alone.
    pub fn build<R: Rng>(filter: &Filter, tuning: &Tuning, rng: &mut R) -> Self {
        let discover = |genre: Option<u32>, floor: u32, rng: &mut R| {
            let mut params = Vec::with_capacity(4);
            if let Some(id) = genre {
                params.push(("with_genres", id.to_string()));
            }
            params.push(("sort_by", "popularity.desc".to_string()));
            params.push(("page", rng.random_range(1..=tuning.max_page.max(1)).to_string()));
            params.push(("vote_count.gte", floor.to_string()));
            Query {
                endpoint: Endpoint::Discover,
                params,
            }
        };

        match filter {
            Filter::ByCategory(id) => discover(Some(*id), tuning.category_vote_floor, rng),
            Filter::UnfilteredPopular => discover(None, tuning.popular_vote_floor, rng),
            Filter::ByText(text) => Query {
                endpoint: Endpoint::Search,
                params: vec![("query", text.clone())],
            },
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn category_query() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = Query::build(&Filter::ByCategory(35), &Tuning::default(), &mut rng);
        assert_eq!(q.endpoint, Endpoint::Discover);
        assert_eq!(q.param("with_genres"), Some("35"));
        assert_eq!(q.param("sort_by"), Some("popularity.desc"));
        assert_eq!(q.param("vote_count.gte"), Some("100"));
        assert!(q.param("query").is_none());
    }

    #[test]
    fn popular_query_has_no_genre_and_higher_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = Query::build(&Filter::UnfilteredPopular, &Tuning::default(), &mut rng);
        assert_eq!(q.endpoint, Endpoint::Discover);
        assert!(q.param("with_genres").is_none());
        assert_eq!(q.param("vote_count.gte"), Some("500"));
    }

    #[test]
    fn pages_stay_in_range_and_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let tuning = Tuning::default();
        let mut seen = [false; 6];
        for _ in 0..500 {
            let q = Query::build(&Filter::UnfilteredPopular, &tuning, &mut rng);
            let page: usize = q.param("page").unwrap().parse().unwrap();
            assert!((1..=5).contains(&page), "page {page} out of range");
            seen[page] = true;
        }
        assert!(seen[1..].iter().all(|&s| s), "not every page was drawn");
    }

    #[test]
    fn text_query_has_only_the_query() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = Query::build(
            &Filter::ByText("the thing".into()),
            &Tuning::default(),
            &mut rng,
        );
        assert_eq!(q.endpoint, Endpoint::Search);
        assert_eq!(q.params, vec![("query", "the thing".to_string())]);
    }

    #[test]
    fn custom_tuning_is_honored() {
        let tuning = Tuning {
            category_vote_floor: 3,
            max_page: 1,
            ..Tuning::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let q = Query::build(&Filter::ByCategory(18), &tuning, &mut rng);
        assert_eq!(q.param("vote_count.gte"), Some("3"));
        assert_eq!(q.param("page"), Some("1"));
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::Discover.path(), "/discover/movie");
        assert_eq!(Endpoint::Search.path(), "/search/movie");
    }
}

// Static genre and mood tables used to render the sub-menus and to pick
// the provider category id sent with discovery queries.

/// A genre row: menu key, display label and TMDB genre id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub id: u32,
}

/// A mood row. A mood fans out over several genres, so it carries a list
/// of ids and one of them is chosen per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub ids: Vec<u32>,
}

/// Both lookup tables, kept in menu order. Built once at startup and
/// borrowed by the UI for the rest of the run.
#[derive(Debug, Clone)]
pub struct Catalog {
    genres: Vec<GenreEntry>,
    moods: Vec<MoodEntry>,
}

impl Catalog {
    /// The tables the CLI ships with.
    pub fn standard() -> Self {
        Catalog {
            genres: vec![
                genre("1", "Action", 28),
                genre("2", "Comedy", 35),
                genre("3", "Drama", 18),
                genre("4", "Horror", 27),
                genre("5", "Romance", 10749),
                genre("6", "Sci-Fi", 878),
                genre("7", "Thriller", 53),
                genre("8", "Animation", 16),
                genre("9", "Documentary", 99),
            ],
            moods: vec![
                mood("1", "Excited", &[28, 878, 12]),
                mood("2", "Happy", &[35, 10749, 16]),
                mood("3", "Sad", &[18, 10749]),
                mood("4", "Scared", &[27, 53]),
                mood("5", "Thoughtful", &[99, 18, 36]),
            ],
        }
    }

    pub fn genres(&self) -> &[GenreEntry] {
        &self.genres
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// Look up a genre by its menu key. Surrounding whitespace is ignored.
    pub fn genre(&self, key: &str) -> Option<&GenreEntry> {
        let key = key.trim();
        self.genres.iter().find(|g| g.key == key)
    }

    /// Look up a mood by its menu key. Surrounding whitespace is ignored.
    pub fn mood(&self, key: &str) -> Option<&MoodEntry> {
        let key = key.trim();
        self.moods.iter().find(|m| m.key == key)
    }
}

fn genre(key: &'static str, label: &'static str, id: u32) -> GenreEntry {
    GenreEntry { key, label, id }
}

fn mood(key: &'static str, label: &'static str, ids: &[u32]) -> MoodEntry {
    MoodEntry {
        key,
        label,
        ids: ids.to_vec(),
    }
}

// UI layer: the interactive menu loop, written as a small state machine so
// each transition can be driven from tests with a scripted prompt and a
// fake movie source.

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::style::{style, Stylize};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::debug;

use crate::api::{fetch_candidates, MovieSource};
use crate::catalog::Catalog;
use crate::config::{self, Config, Tuning};
use crate::error::{ConfigError, FlowError, TransportError};
use crate::movie::{format_record, Movie};
use crate::query::Filter;
use crate::select::{first, pick_one};

const FAREWELL: &str = "Exiting. Enjoy your movie!";

/// Source of user answers. `Ok(None)` means input is exhausted.
pub trait Prompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads answers from the real terminal. Uses `dialoguer` when stdin is a
/// tty and plain line reads otherwise, so piped input ends cleanly.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            let answer = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("Failed to read from terminal")?;
            return Ok(Some(answer));
        }

        print!("{prompt}: ");
        io::stdout().flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok((read > 0).then_some(line))
    }
}

/// The four numbered menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Genre,
    Mood,
    Search,
    Popular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    Running(Flow),
    AskAgain,
    Terminated,
}

/// Handle the startup credential check. On a missing key the remediation
/// lines are printed and `None` is returned so the caller can exit cleanly.
pub fn await_credential<W: Write>(
    config: Result<Config, ConfigError>,
    out: &mut W,
) -> Result<Option<Config>> {
    match config {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::MissingApiKey) => {
            for line in config::remediation() {
                writeln!(out, "{line}")?;
            }
            Ok(None)
        }
    }
}

/// One interactive run. Borrows the catalog, tuning and movie source and
/// owns the prompt, output sink and random generator. Output is plain
/// text unless `with_color(true)` is set.
pub struct Session<'a, S: ?Sized, P, W, R> {
    source: &'a S,
    catalog: &'a Catalog,
    tuning: &'a Tuning,
    prompt: P,
    out: W,
    rng: R,
    color: bool,
}

impl<'a, S, P, W, R> Session<'a, S, P, W, R>
where
    S: MovieSource + ?Sized,
    P: Prompt,
    W: Write,
    R: Rng,
{
    pub fn new(
        source: &'a S,
        catalog: &'a Catalog,
        tuning: &'a Tuning,
        prompt: P,
        out: W,
        rng: R,
    ) -> Self {
        Session {
            source,
            catalog,
            tuning,
            prompt,
            out,
            rng,
            color: false,
        }
    }

    /// Style headings and error lines with ANSI colors. Only worth turning
    /// on when the output sink is a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Print the banner and step from `MainMenu` until `Terminated`.
    pub fn run(&mut self) -> Result<()> {
        let banner = self.heading("Movie Recommendation CLI");
        writeln!(self.out, "{banner}")?;
        writeln!(self.out, "Find your next movie to watch")?;

        let mut state = State::MainMenu;
        while state != State::Terminated {
            let next = self.step(state)?;
            debug!(from = ?state, to = ?next, "menu transition");
            state = next;
        }
        Ok(())
    }

    /// Perform the work of `state` and return the state to move to.
    pub fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::MainMenu => self.main_menu(),
            State::Running(flow) => {
                match self.run_flow(flow)? {
                    Ok(movie) => {
                        writeln!(self.out, "{}", format_record(&movie, self.tuning.rule_width))?
                    }
                    Err(err) => self.report(flow, &err)?,
                }
                Ok(State::AskAgain)
            }
            State::AskAgain => {
                writeln!(self.out)?;
                let answer = self.prompt.ask("Get another recommendation? (y/n)")?;
                if answer.as_deref().is_some_and(is_affirmative) {
                    Ok(State::MainMenu)
                } else {
                    self.farewell()
                }
            }
            State::Terminated => Ok(State::Terminated),
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn main_menu(&mut self) -> Result<State> {
        writeln!(self.out)?;
        let heading = self.heading("--- Main Menu ---");
        writeln!(self.out, "{heading}")?;
        writeln!(self.out, "1. Browse by genre")?;
        writeln!(self.out, "2. Browse by mood")?;
        writeln!(self.out, "3. Search specific movie")?;
        writeln!(self.out, "4. Random popular movie")?;
        writeln!(self.out, "5. Exit")?;
        writeln!(self.out)?;

        let Some(choice) = self.prompt.ask("Choice")? else {
            return self.farewell();
        };
        let next = match choice.trim() {
            "1" => State::Running(Flow::Genre),
            "2" => State::Running(Flow::Mood),
            "3" => State::Running(Flow::Search),
            "4" => State::Running(Flow::Popular),
            "5" => return self.farewell(),
            _ => {
                let alert = self.alert("Invalid choice. Please try again.");
                writeln!(self.out, "{alert}")?;
                State::MainMenu
            }
        };
        Ok(next)
    }

    fn farewell(&mut self) -> Result<State> {
        writeln!(self.out)?;
        writeln!(self.out, "{FAREWELL}")?;
        Ok(State::Terminated)
    }

    /// Outer `Result` is terminal I/O, inner is the flow outcome.
    fn run_flow(&mut self, flow: Flow) -> Result<Result<Movie, FlowError>> {
        match flow {
            Flow::Genre => self.genre_flow(),
            Flow::Mood => self.mood_flow(),
            Flow::Search => self.search_flow(),
            Flow::Popular => {
                writeln!(self.out)?;
                writeln!(self.out, "Searching for random popular movie...")?;
                Ok(self.discover(&Filter::UnfilteredPopular))
            }
        }
    }

    fn genre_flow(&mut self) -> Result<Result<Movie, FlowError>> {
        writeln!(self.out)?;
        let heading = self.heading("--- Select Genre ---");
        writeln!(self.out, "{heading}")?;
        for genre in self.catalog.genres() {
            writeln!(self.out, "{}. {}", genre.key, genre.label)?;
        }
        writeln!(self.out)?;

        let choice = self.prompt.ask("Enter genre number")?.unwrap_or_default();
        let Some(genre) = self.catalog.genre(&choice) else {
            return Ok(Err(FlowError::InvalidSelection(choice.trim().to_string())));
        };

        writeln!(self.out)?;
        writeln!(self.out, "Searching for {} movie...", genre.label)?;
        Ok(self.discover(&Filter::ByCategory(genre.id)))
    }

    fn mood_flow(&mut self) -> Result<Result<Movie, FlowError>> {
        writeln!(self.out)?;
        let heading = self.heading("--- Select Mood ---");
        writeln!(self.out, "{heading}")?;
        for mood in self.catalog.moods() {
            writeln!(self.out, "{}. {}", mood.key, mood.label)?;
        }
        writeln!(self.out)?;

        let choice = self.prompt.ask("Enter mood number")?.unwrap_or_default();
        let Some(mood) = self.catalog.mood(&choice) else {
            return Ok(Err(FlowError::InvalidSelection(choice.trim().to_string())));
        };

        writeln!(self.out)?;
        writeln!(self.out, "Searching for {} movie...", mood.label.to_lowercase())?;
        let genre_id = match pick_one(&mood.ids, &mut self.rng) {
            Ok(id) => *id,
            Err(err) => return Ok(Err(err)),
        };
        debug!(mood = mood.label, genre_id, "mood resolved to genre");
        Ok(self.discover(&Filter::ByCategory(genre_id)))
    }

    fn search_flow(&mut self) -> Result<Result<Movie, FlowError>> {
        writeln!(self.out)?;
        let raw = self.prompt.ask("Enter movie title")?.unwrap_or_default();
        let title = raw.trim();
        if title.is_empty() {
            return Ok(Err(FlowError::EmptyQuery));
        }

        let candidates = match self.fetch(&Filter::ByText(title.to_string())) {
            Ok(candidates) => candidates,
            Err(err) => return Ok(Err(err.into())),
        };
        Ok(first(&candidates)
            .cloned()
            .map_err(|_| FlowError::NoMatch(title.to_string())))
    }

    /// Fetch a discovery listing and pick one of its movies at random.
    fn discover(&mut self, filter: &Filter) -> Result<Movie, FlowError> {
        let candidates = self.fetch(filter)?;
        let movie = pick_one(&candidates, &mut self.rng)?.clone();
        debug!(title = %movie.title, of = candidates.len(), "picked movie");
        Ok(movie)
    }

    fn fetch(&mut self, filter: &Filter) -> Result<Vec<Movie>, TransportError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Contacting TMDB...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = fetch_candidates(self.source, filter, self.tuning, &mut self.rng);
        spinner.finish_and_clear();
        result
    }

    fn report(&mut self, flow: Flow, err: &FlowError) -> Result<()> {
        let message = match err {
            FlowError::InvalidSelection(_) => "Invalid selection.".to_string(),
            FlowError::EmptyQuery => "Please enter a valid movie title.".to_string(),
            FlowError::NoResults => "No movies found.".to_string(),
            FlowError::NoMatch(title) => format!("No results found for '{title}'."),
            FlowError::Transport(e) if flow == Flow::Search => format!("Error searching: {e}"),
            FlowError::Transport(e) => format!("Error fetching movie: {e}"),
        };
        let alert = self.alert(&message);
        writeln!(self.out, "{alert}")?;
        Ok(())
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn alert(&self, text: &str) -> String {
        if self.color {
            style(text).red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Only `y` continues, in either case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

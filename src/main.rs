// Entrypoint for the movie picker.
// - Keeps `main` small: load config, build the TMDB client and hand both
//   to the UI loop.
// - A missing api key is reported and the process exits normally.

use std::io::IsTerminal;

use anyhow::Context;
use movie_picker::{
    api::TmdbClient,
    catalog::Catalog,
    config::Config,
    ui::{await_credential, Session, TerminalPrompt},
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let Some(config) = await_credential(Config::from_env(), &mut stdout)? else {
        return Ok(());
    };

    let client = TmdbClient::new(&config).context("Failed to build TMDB client")?;
    let catalog = Catalog::standard();

    // Blocks until the user exits or declines another recommendation.
    Session::new(
        &client,
        &catalog,
        &config.tuning,
        TerminalPrompt,
        stdout,
        rand::rng(),
    )
    .with_color(color)
    .run()
}

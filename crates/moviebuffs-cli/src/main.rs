//! moviebuffs - MovieBuffs catalog browser CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use moviebuffs_api::movies::{MOVIEBUFFS_BASE_URL, MoviesClient};
use moviebuffs_store::{FetchState, MovieStore};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Override the catalog base URL.
    #[arg(long, global = true)]
    base_url: Option<Url>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse the movie catalog.
    Movies(MoviesCommand),
    /// Manage application configuration.
    Config(ConfigCommand),
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesCommand {
    /// Movies subcommand to run.
    #[command(subcommand)]
    command: MoviesSubcommands,
}

/// Available movies subcommands.
#[derive(Subcommand)]
enum MoviesSubcommands {
    /// List the full movie catalog.
    List,
    /// Show details for a single movie.
    Show(ShowArgs),
}

/// Arguments for the `movies show` subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// Exact title of the movie to show.
    #[arg(long)]
    title: String,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the resolved configuration.
    Show,
    /// Set the catalog base URL override.
    SetUrl(SetUrlArgs),
}

/// Arguments for the `config set-url` subcommand.
#[derive(clap::Args)]
struct SetUrlArgs {
    /// Catalog base URL (e.g. "https://kareemy.github.io/").
    url: Url,
}

/// Resolves the catalog base URL override.
///
/// Precedence: `--base-url` flag, then config, then the client default.
///
/// # Errors
///
/// Returns an error if the configured URL fails to parse.
fn resolve_base_url(flag: Option<&Url>, config: &AppConfig) -> Result<Option<Url>> {
    if let Some(url) = flag {
        return Ok(Some(url.clone()));
    }
    config
        .api
        .base_url
        .as_deref()
        .map(|raw| Url::parse(raw).with_context(|| format!("invalid base URL in config: {raw}")))
        .transpose()
}

/// Builds a `MoviesClient` honoring CLI and config overrides.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the client fails to build.
#[instrument(skip_all)]
fn build_movies_client(base_url: Option<&Url>, dir: Option<&PathBuf>) -> Result<MoviesClient> {
    let config_path = resolve_config_path(dir)?;
    let config = AppConfig::load(&config_path)?;
    let override_url = resolve_base_url(base_url, &config)?;

    let mut builder = MoviesClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(url) = override_url {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build MovieBuffs client")
}

/// Runs the `movies list` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the catalog fetch fails.
#[instrument(skip_all)]
async fn run_movies_list(base_url: Option<&Url>, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_movies_client(base_url, dir)?;
    let store = MovieStore::new(client);
    store.refresh().await;

    match store.state().fetch {
        FetchState::Success(movies) => {
            tracing::info!("Total movies: {}", movies.len());
            tracing::info!("Title\t\t\tReleaseDate\tRating\tScore\tLength");
            for movie in &movies {
                tracing::info!(
                    "{}\t{}\t{}\t{}\t{}",
                    movie.title,
                    movie.release_date,
                    movie.content_rating,
                    movie.review_score,
                    movie.length,
                );
            }
            Ok(())
        }
        FetchState::Error(kind) => bail!("catalog fetch failed ({kind})"),
        FetchState::Loading => bail!("catalog fetch did not complete"),
    }
}

/// Runs the `movies show` subcommand.
///
/// Drives the store the way a rendering layer would: refresh, select the
/// matching record, switch to the detail screen, then report the observed
/// state.
///
/// # Errors
///
/// Returns an error if the catalog fetch fails or the title is not in the
/// catalog.
#[instrument(skip_all)]
async fn run_movies_show(
    args: &ShowArgs,
    base_url: Option<&Url>,
    dir: Option<&PathBuf>,
) -> Result<()> {
    let client = build_movies_client(base_url, dir)?;
    let store = MovieStore::new(client);
    store.refresh().await;

    let state = store.state();
    let movies = match &state.fetch {
        FetchState::Success(movies) => movies,
        FetchState::Error(kind) => bail!("catalog fetch failed ({kind})"),
        FetchState::Loading => bail!("catalog fetch did not complete"),
    };
    let Some(movie) = movies.iter().find(|m| m.title == args.title) else {
        bail!("movie not found in catalog: {}", args.title);
    };
    store.select_movie(movie.clone());
    store.show_detail();

    let detail = store.state();
    let selected = detail
        .navigation
        .selected
        .context("selection was not committed")?;
    tracing::info!("Title: {}", selected.title);
    tracing::info!("Release Date: {}", selected.release_date);
    tracing::info!("Content Rating: {}", selected.content_rating);
    tracing::info!("Review Score: {}", selected.review_score);
    tracing::info!("Length: {}", selected.length);
    tracing::info!("Poster: {}", selected.poster);
    tracing::info!("Backdrop: {}", selected.big_image);
    tracing::info!("---");
    tracing::info!("{}", selected.description);

    Ok(())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded.
#[instrument(skip_all)]
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir)?;
    let config = AppConfig::load(&config_path)?;

    tracing::info!("Config file: {}", config_path.display());
    match config.api.base_url.as_deref() {
        Some(url) => tracing::info!("Catalog base URL: {url}"),
        None => tracing::info!("Catalog base URL: (default) {MOVIEBUFFS_BASE_URL}"),
    }

    Ok(())
}

/// Runs the `config set-url` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or saved.
#[instrument(skip_all)]
fn run_config_set_url(args: &SetUrlArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir)?;
    let mut config = AppConfig::load(&config_path)?;
    config.api.base_url = Some(String::from(args.url.as_str()));
    config.save(&config_path)?;

    tracing::info!("Catalog base URL set: {}", args.url);
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Movies(movies) => match movies.command {
            MoviesSubcommands::List => {
                run_movies_list(cli.base_url.as_ref(), cli.dir.as_ref()).await
            }
            MoviesSubcommands::Show(args) => {
                run_movies_show(&args, cli.base_url.as_ref(), cli.dir.as_ref()).await
            }
        },
        Commands::Config(config) => match config.command {
            ConfigSubcommands::Show => run_config_show(cli.dir.as_ref()),
            ConfigSubcommands::SetUrl(args) => run_config_set_url(&args, cli.dir.as_ref()),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_resolve_base_url_flag_wins() {
        // Arrange
        let flag = Url::parse("http://flag.example/").unwrap();
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some(String::from("http://config.example/")),
            },
        };

        // Act
        let resolved = resolve_base_url(Some(&flag), &config).unwrap();

        // Assert
        assert_eq!(resolved, Some(flag));
    }

    #[test]
    fn test_resolve_base_url_falls_back_to_config() {
        // Arrange
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some(String::from("http://config.example/")),
            },
        };

        // Act
        let resolved = resolve_base_url(None, &config).unwrap();

        // Assert
        assert_eq!(resolved.unwrap().as_str(), "http://config.example/");
    }

    #[test]
    fn test_resolve_base_url_defaults_to_none() {
        // Arrange & Act
        let resolved = resolve_base_url(None, &AppConfig::default()).unwrap();

        // Assert
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_resolve_base_url_rejects_invalid_config_value() {
        // Arrange
        let config = AppConfig {
            api: ApiConfig {
                base_url: Some(String::from("not a url")),
            },
        };

        // Act
        let result = resolve_base_url(None, &config);

        // Assert
        assert!(result.is_err());
    }
}

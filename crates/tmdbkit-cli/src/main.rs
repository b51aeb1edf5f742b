//! tmdbkit - command-line client for the TMDB API v3.

/// Application configuration (TOML).
mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{API_TOKEN_ENV, AppConfig, resolve_config_path};
use tmdbkit_api::endpoint::{
    AccountEndpoint, AccountListQuery, AuthenticationEndpoint, ConfigurationEndpoint,
    MovieEndpoint,
};
use tmdbkit_api::http::HttpResponse;
use tmdbkit_api::models::{ListSort, Session};
use tmdbkit_api::{Endpoint, TmdbClient};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Override the API base URL (e.g. "http://localhost:8080/3").
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Query account resources.
    Account(AccountCommand),
    /// Query authentication resources.
    Auth(AuthCommand),
    /// Query API configuration.
    Configuration(ConfigurationArgs),
    /// Query movie resources.
    Movie(MovieCommand),
}

/// Arguments for the `account` subcommand.
#[derive(clap::Args)]
struct AccountCommand {
    /// Account subcommand to run.
    #[command(subcommand)]
    command: AccountSubcommands,
}

/// Available account subcommands.
#[derive(Subcommand)]
enum AccountSubcommands {
    /// Get account details for a session.
    Details(AccountDetailsArgs),
    /// Get a favourite, watchlist or rated list.
    List(AccountListArgs),
}

/// Arguments for the `account details` subcommand.
#[derive(clap::Args)]
struct AccountDetailsArgs {
    /// Session ID.
    #[arg(long, required = true)]
    session_id: String,
}

/// Account list kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AccountListKind {
    /// Favourite movies.
    FavouriteMovies,
    /// Favourite TV series.
    FavouriteTv,
    /// Movie watchlist.
    WatchlistMovies,
    /// TV series watchlist.
    WatchlistTv,
    /// Rated movies.
    RatedMovies,
    /// Rated TV series.
    RatedTv,
}

/// Sort order for account lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortArg {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

/// Arguments for the `account list` subcommand.
#[derive(clap::Args)]
struct AccountListArgs {
    /// List to fetch.
    #[arg(long, value_enum)]
    kind: AccountListKind,
    /// Account ID.
    #[arg(long, required = true)]
    account_id: u64,
    /// Session ID.
    #[arg(long, required = true)]
    session_id: String,
    /// Sort by creation date.
    #[arg(long, value_enum)]
    sort: Option<SortArg>,
    /// Page number.
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for the `auth` subcommand.
#[derive(clap::Args)]
struct AuthCommand {
    /// Auth subcommand to run.
    #[command(subcommand)]
    command: AuthSubcommands,
}

/// Available auth subcommands.
#[derive(Subcommand)]
enum AuthSubcommands {
    /// Create a guest session.
    GuestSession,
    /// Create a request token.
    RequestToken,
    /// Validate the configured API token.
    Validate,
}

/// Configuration resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ConfigurationResource {
    /// Image base URLs and sizes.
    Api,
    /// Countries.
    Countries,
    /// Departments and jobs.
    Jobs,
    /// Languages.
    Languages,
    /// Supported translations.
    PrimaryTranslations,
    /// Timezones.
    Timezones,
}

/// Arguments for the `configuration` subcommand.
#[derive(clap::Args)]
struct ConfigurationArgs {
    /// Resource to fetch.
    #[arg(value_enum)]
    resource: ConfigurationResource,
    /// Response language (falls back to config `tmdb.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieCommand {
    /// Movie subcommand to run.
    #[command(subcommand)]
    command: MovieSubcommands,
}

/// Available movie subcommands.
#[derive(Subcommand)]
enum MovieSubcommands {
    /// Get movie details.
    Details(MovieDetailsArgs),
    /// Get popular movies.
    Popular(PageArgs),
    /// Get top rated movies.
    TopRated(PageArgs),
}

/// Arguments for the `movie details` subcommand.
#[derive(clap::Args)]
struct MovieDetailsArgs {
    /// TMDB movie ID (e.g. 550).
    movie_id: u64,
    /// Response language (falls back to config `tmdb.language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for paged movie lists.
#[derive(clap::Args)]
struct PageArgs {
    /// Page number.
    #[arg(long)]
    page: Option<u32>,
    /// Response language (falls back to config `tmdb.language`).
    #[arg(long)]
    language: Option<String>,
}

impl From<SortArg> for ListSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Asc => Self::CreatedAtAscending,
            SortArg::Desc => Self::CreatedAtDescending,
        }
    }
}

/// Maps a parsed command to its endpoint.
///
/// `default_language` is used when the command has no `--language`.
fn build_endpoint(command: Commands, default_language: Option<&str>) -> Box<dyn Endpoint> {
    let language = |arg: Option<String>| arg.or_else(|| default_language.map(String::from));

    match command {
        Commands::Account(account) => match account.command {
            AccountSubcommands::Details(args) => Box::new(AccountEndpoint::Details {
                session: Session::new(true, args.session_id),
            }),
            AccountSubcommands::List(args) => {
                let session = Session::new(true, args.session_id);
                let mut query = AccountListQuery::new(args.account_id, session);
                if let Some(sort) = args.sort {
                    query = query.sort(sort.into());
                }
                if let Some(page) = args.page {
                    query = query.page(page);
                }
                Box::new(match args.kind {
                    AccountListKind::FavouriteMovies => AccountEndpoint::FavouriteMovies(query),
                    AccountListKind::FavouriteTv => AccountEndpoint::FavouriteTvSeries(query),
                    AccountListKind::WatchlistMovies => AccountEndpoint::WatchlistMovies(query),
                    AccountListKind::WatchlistTv => AccountEndpoint::WatchlistTvSeries(query),
                    AccountListKind::RatedMovies => AccountEndpoint::RatedMovies(query),
                    AccountListKind::RatedTv => AccountEndpoint::RatedTvSeries(query),
                })
            }
        },
        Commands::Auth(auth) => Box::new(match auth.command {
            AuthSubcommands::GuestSession => AuthenticationEndpoint::CreateGuestSession,
            AuthSubcommands::RequestToken => AuthenticationEndpoint::CreateRequestToken,
            AuthSubcommands::Validate => AuthenticationEndpoint::Validate,
        }),
        Commands::Configuration(args) => Box::new(match args.resource {
            ConfigurationResource::Api => ConfigurationEndpoint::Api,
            ConfigurationResource::Countries => ConfigurationEndpoint::Countries {
                language: language(args.language),
            },
            ConfigurationResource::Jobs => ConfigurationEndpoint::Jobs,
            ConfigurationResource::Languages => ConfigurationEndpoint::Languages,
            ConfigurationResource::PrimaryTranslations => {
                ConfigurationEndpoint::PrimaryTranslations
            }
            ConfigurationResource::Timezones => ConfigurationEndpoint::Timezones,
        }),
        Commands::Movie(movie) => Box::new(match movie.command {
            MovieSubcommands::Details(args) => MovieEndpoint::Details {
                movie_id: args.movie_id,
                language: language(args.language),
            },
            MovieSubcommands::Popular(args) => MovieEndpoint::Popular {
                page: args.page,
                language: language(args.language),
            },
            MovieSubcommands::TopRated(args) => MovieEndpoint::TopRated {
                page: args.page,
                language: language(args.language),
            },
        }),
    }
}

/// Logs the response status: `info` for 2xx, `warn` otherwise.
fn report_status(response: &HttpResponse) {
    let status_code = response.status_code();
    if response.is_success() {
        tracing::info!("TMDB API responded with HTTP {status_code}");
    } else {
        tracing::warn!("TMDB API responded with HTTP {status_code}");
    }
}

/// Runs the parsed command and writes the response body to stdout.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, no API token is
/// available, the client fails to build, or the request cannot complete.
#[instrument(skip_all)]
async fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.dir.as_ref())?;
    let config = AppConfig::load(&config_path)?;

    let api_token = config
        .tmdb
        .resolve_api_token(std::env::var(API_TOKEN_ENV).ok())?;
    let base_url = config.tmdb.resolve_base_url(cli.base_url.as_deref())?;

    let mut builder = TmdbClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    let client = builder.build().context("failed to build TMDB client")?;

    let endpoint = build_endpoint(cli.command, config.tmdb.language.as_deref());
    let response = client
        .get(endpoint.as_ref())
        .await
        .with_context(|| format!("TMDB request failed: {}", endpoint.path()))?;

    report_status(&response);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(response.data())
        .and_then(|()| stdout.write_all(b"\n"))
        .context("failed to write response to stdout")?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    run(Cli::parse()).await
}

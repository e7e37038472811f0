mod display;
mod menu;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{MovieCatalog, MovieRecord};
use display::Label;
use menu::Menu;
use search::{DEFAULT_TOP_N, IndexKind, QueryEngine, RankBy, RankingEngine};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Movie Catalog - search and rank a movie collection
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Search a movie collection by title, keyword, cast and genre", long_about = None)]
struct Cli {
    /// Path to the movie data file
    #[arg(short, long, env = "MOVIE_CATALOG_DATA", default_value = "movies_data.csv")]
    data_file: PathBuf,

    /// Print result lists as JSON instead of numbered text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default when no command is given)
    Menu {
        /// Length of the top rated and top revenue listings
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Search titles (case-insensitive substring match)
    Titles {
        /// Search term; an empty term lists every movie
        term: String,
    },

    /// Search keywords (case-insensitive substring match)
    Keywords {
        term: String,
    },

    /// Find cast members whose name contains the term
    Cast {
        term: String,

        /// Treat the term as an exact name and list that person's movies
        #[arg(long)]
        exact: bool,
    },

    /// List every genre
    Genres,

    /// List the movies in a genre (exact, case-sensitive name)
    Genre {
        name: String,
    },

    /// List the highest ranked movies
    Top {
        /// Field to rank by
        #[arg(long, value_enum, default_value_t = RankArg::Rating)]
        by: RankArg,

        /// Number of movies to list
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        limit: usize,
    },

    /// Show the details of the movie with exactly this title
    Show {
        title: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RankArg {
    Rating,
    Revenue,
}

impl From<RankArg> for RankBy {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::Rating => RankBy::Rating,
            RankArg::Revenue => RankBy::Revenue,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load the catalog once; it is read-only from here on
    info!("Loading movie catalog from {}", cli.data_file.display());
    let start = Instant::now();
    let catalog = Arc::new(
        MovieCatalog::load_from_file(&cli.data_file)
            .with_context(|| format!("Failed to load {}", cli.data_file.display()))?,
    );
    info!("Catalog ready in {:?}", start.elapsed());

    let query = QueryEngine::new(catalog.clone());
    let ranking = RankingEngine::new(catalog);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Menu { top: DEFAULT_TOP_N }) {
        Commands::Menu { top } => {
            let stdin = std::io::stdin();
            Menu::new(&query, &ranking, stdin.lock(), &mut out, top).run()?;
        }
        Commands::Titles { term } => {
            let results = query.search_titles(&term);
            print_results(&mut out, &format!("Titles matching '{}':", term), &results, Label::Title, cli.json)?;
        }
        Commands::Keywords { term } => {
            let results = query.search_keywords(&term);
            print_results(&mut out, &format!("Keywords matching '{}':", term), &results, Label::Title, cli.json)?;
        }
        Commands::Cast { term, exact } => handle_cast(&mut out, &query, &term, exact, cli.json)?,
        Commands::Genres => {
            let genres = query.list_keys(IndexKind::Genre);
            if cli.json {
                display::print_keys_json(&mut out, &genres)?;
            } else {
                display::print_header(&mut out, "Genres:")?;
                display::print_keys(&mut out, &genres)?;
            }
        }
        Commands::Genre { name } => {
            let mut results = query.lookup_genre(&name);
            search::sort::sort_records(&mut results, search::sort::by_title);
            print_results(&mut out, &format!("{} movies:", name), &results, Label::Title, cli.json)?;
        }
        Commands::Top { by, limit } => {
            let rank_by = RankBy::from(by);
            let results = ranking.top(rank_by, limit);
            let label = match rank_by {
                RankBy::Rating => Label::TitleAndRating,
                RankBy::Revenue => Label::TitleAndRevenue,
            };
            print_results(&mut out, &format!("Top {} by {}:", limit, rank_by), &results, label, cli.json)?;
        }
        Commands::Show { title } => {
            let movie = query
                .find_title(&title)
                .ok_or_else(|| anyhow!("No movie titled '{}'", title))?;
            if cli.json {
                display::print_json(&mut out, &[movie])?;
            } else {
                display::print_movie_info(&mut out, movie)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Handle the 'cast' command
fn handle_cast(out: &mut impl Write, query: &QueryEngine, term: &str, exact: bool, json: bool) -> Result<()> {
    if exact {
        let mut results = query.lookup_cast(term);
        search::sort::sort_records(&mut results, search::sort::by_title);
        return print_results(out, &format!("Movies featuring {}:", term), &results, Label::Title, json);
    }

    let names = query.match_cast_names(term);
    if json {
        display::print_keys_json(out, &names)?;
    } else if names.is_empty() {
        writeln!(out, "{} No cast members match '{}'", "✗".red(), term)?;
    } else {
        display::print_header(out, &format!("Cast members matching '{}':", term))?;
        display::print_keys(out, &names)?;
    }
    Ok(())
}

/// Print a result list as numbered text or JSON
fn print_results(
    out: &mut impl Write,
    header: &str,
    results: &[&MovieRecord],
    label: Label,
    json: bool,
) -> Result<()> {
    if json {
        return display::print_json(out, results);
    }

    display::print_header(out, header)?;
    if results.is_empty() {
        writeln!(out, "{} No movies found", "✗".red())?;
    } else {
        display::print_movies(out, results, label)?;
    }
    Ok(())
}

use data_loader::MovieCatalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/sample_movies.csv"));

    println!("Loading movie catalog from {}...\n", path.display());

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(&path)?;
    let elapsed = start.elapsed();

    let (movies, cast, genres) = catalog.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Cast members: {}", cast);
    println!("Genres: {}", genres);

    if let Some(first) = catalog.records().first() {
        println!("\nFirst record as JSON:");
        println!("{}", serde_json::to_string_pretty(first)?);
    }
    Ok(())
}

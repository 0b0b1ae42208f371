use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, CatalogIndex, MovieRecord};
use server::{MovieRecommendation, MovieRecommender, RecommenderConfig};
use sources::DEFAULT_USER_AGENT;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// movie-recs - Overview similarity movie recommender
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Recommends movies with similar plots using TF-IDF over catalog overviews", long_about = None)]
struct Cli {
    /// Path to the TMDB movies CSV snapshot
    #[arg(short, long, default_value = "data/tmdb_5000_movies.csv")]
    catalog: PathBuf,

    /// Deadline for each external summary fetch, in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Never fetch external summaries; use catalog overviews only
    #[arg(long)]
    offline: bool,

    /// User agent sent to the summary providers
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movies with a plot similar to a title
    Recommend {
        /// Title of the movie to start from
        #[arg(long)]
        title: String,

        /// Show the similarity score and where the query text came from
        #[arg(long)]
        explain: bool,

        /// Print the recommendations as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,

        /// Maximum number of results to display
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of concurrent offline requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Status lines go to stderr so --json output stays clean
    eprintln!("Loading movie catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.catalog).context("Failed to load movie catalog")?,
    );
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let config = RecommenderConfig::new()
        .with_fetch_timeout(Duration::from_secs(cli.timeout_secs))
        .with_user_agent(cli.user_agent)
        .with_enrichment(!cli.offline);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            explain,
            json,
        } => handle_recommend(catalog, &config, &title, explain, json).await?,
        Commands::Search { title, limit } => handle_search(&catalog, &title, limit),
        Commands::Benchmark { requests } => handle_benchmark(catalog, &config, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    config: &RecommenderConfig,
    title: &str,
    explain: bool,
    json: bool,
) -> Result<()> {
    let recommender = MovieRecommender::new(catalog, config)
        .context("Failed to build the HTTP client")?;

    let report = recommender.recommend_detailed(title).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.recommendations)?);
        return Ok(());
    }

    if explain {
        match &report.origin {
            Some(origin) => println!("Query text for '{}': {}", report.title, origin),
            None => println!("No summary or catalog overview found for '{}'", report.title),
        }
    }

    print_recommendations(&report.recommendations, explain);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str, limit: usize) {
    let title_lower = title.to_lowercase();
    let mut matches: Vec<(CatalogIndex, &MovieRecord)> = catalog.search_titles(title);

    // Exact matches first; the sort is stable so catalog order survives
    matches.sort_by_key(|(_, record)| record.title.to_lowercase() != title_lower);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
        return;
    }

    for (index, record) in matches.iter().take(limit) {
        println!(
            "{}: {} [{}] {} {}",
            index,
            record.title,
            record.genre_names().join(", "),
            record.release_date,
            if record.has_overview() { "" } else { "(no overview)" }
        );
    }
    if matches.len() > limit {
        println!("  ... and {} more", matches.len() - limit);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    config: &RecommenderConfig,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    if catalog.is_empty() {
        bail!("Catalog is empty, nothing to benchmark");
    }

    // Offline: measure the engine, not the providers
    let config = config.clone().with_enrichment(false);
    let recommender = MovieRecommender::new(catalog.clone(), &config)?;

    // Pick random catalog titles
    let titles: Vec<String> = (0..requests)
        .filter_map(|_| {
            let index = rand::random::<u32>() as usize % catalog.len();
            catalog.get(index).map(|record| record.title.clone())
        })
        .collect();

    info!("Running {} concurrent recommendations", titles.len());
    let wall_start = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = vec![];
    for title in titles {
        let recommender = recommender.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let results = recommender.recommend(&title).await?;
            Ok::<_, anyhow::Error>((start.elapsed(), results.len()))
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    let mut empty = 0;
    for handle in handles {
        let (elapsed, count) = handle.await??;
        if count == 0 {
            empty += 1;
        }
        timings.push(elapsed);
    }
    let wall_time = wall_start.elapsed();

    let total_latency: Duration = timings.iter().sum();
    let avg_latency = total_latency / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} with no recommendations)", timings.len(), empty);
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[MovieRecommendation], explain: bool) {
    println!("{}", "Movie Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("  (none)");
        return;
    }

    for (i, movie) in recommendations.iter().enumerate() {
        let rank = i + 1;
        print!(
            "{}. {} ({}) [{}]",
            rank.to_string().green(),
            movie.title.bold(),
            if movie.release_date.is_empty() { "????" } else { movie.release_date.as_str() },
            movie.genres.join(", "),
        );
        if explain {
            print!(" - Similarity: {:.3}", movie.similarity);
        }
        println!();

        println!("   Language: {}  Revenue: ${}", movie.language, movie.revenue);
        if !movie.production_companies.is_empty() {
            println!("   Companies: {}", movie.production_companies.join(", "));
        }
        println!("   {}", movie.overview.dimmed());
    }
}

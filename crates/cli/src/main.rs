use anyhow::{anyhow, Context, Result};
use catalog::{Video, VideoCatalog, VideoId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{RecencyTracker, RecommenderConfig, DEFAULT_HISTORY_CAPACITY};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// PrimeRecs - "watch next" recommendations from recently watched videos
#[derive(Parser)]
#[command(name = "prime-recs")]
#[command(about = "Recommends a video similar to one you watched recently", long_about = None)]
struct Cli {
    /// Path to the videos.dat catalog file
    #[arg(short, long, global = true, default_value = "data/videos.dat")]
    data_file: PathBuf,

    /// Print videos as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a watch history and ask for recommendations
    Recommend {
        /// Video IDs watched, oldest first (repeat the flag or separate with commas)
        #[arg(long = "watch", required = true, value_delimiter = ',')]
        watched: Vec<VideoId>,

        /// How many recent watches are remembered
        #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
        capacity: usize,

        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,

        /// Number of recommendations to ask for
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Show a video and the video it is most similar to
    Video {
        /// Video ID to display
        #[arg(long)]
        video_id: VideoId,
    },

    /// Search for videos by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Load the catalog and report problems
    Validate,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        VideoCatalog::load_from_file(&cli.data_file)
            .with_context(|| format!("Failed to load catalog from {}", cli.data_file.display()))?,
    );
    info!("Loaded catalog in {:?}", start.elapsed());

    match cli.command {
        Commands::Recommend {
            watched,
            capacity,
            seed,
            count,
        } => handle_recommend(catalog, &watched, capacity, seed, count, cli.json)?,
        Commands::Video { video_id } => handle_video(&catalog, video_id, cli.json)?,
        Commands::Search { title } => handle_search(&catalog, &title, cli.json)?,
        Commands::Validate => handle_validate(&catalog)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<VideoCatalog>,
    watched: &[VideoId],
    capacity: usize,
    seed: Option<u64>,
    count: usize,
    json: bool,
) -> Result<()> {
    let mut config = RecommenderConfig::default().with_capacity(capacity);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut recommender = config.build(catalog)?;

    for &video_id in watched {
        recommender
            .watch(video_id)
            .with_context(|| format!("Cannot watch video {}", video_id))?;
    }
    info!(
        "Watch history holds {} of {} videos",
        recommender.history().size(),
        watched.len()
    );

    let mut recommendations = Vec::with_capacity(count);
    for _ in 0..count {
        recommendations.push(recommender.get_recommendation().cloned());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!("{}", "Recommendations:".bold().blue());
    for (rank, recommendation) in recommendations.iter().enumerate() {
        match recommendation {
            Some(video) => println!("{}. {}", (rank + 1).to_string().green(), describe(video)),
            None => println!("{}. {}", (rank + 1).to_string().green(), "no recommendation".dimmed()),
        }
    }
    Ok(())
}

/// Handle the 'video' command
fn handle_video(catalog: &VideoCatalog, video_id: VideoId, json: bool) -> Result<()> {
    let video = catalog
        .get_video(video_id)
        .ok_or_else(|| anyhow!("Video {} not found", video_id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(video)?);
        return Ok(());
    }

    println!("{}", format!("Video ID: {}", video.id).bold().blue());
    println!("{}Title: {}", "• ".green(), video.title);
    match video.most_similar_id {
        Some(similar_id) => match catalog.get_video(similar_id) {
            Some(similar) => println!("{}Most similar: {}", "• ".green(), describe(similar)),
            None => println!(
                "{}Most similar: {} ({})",
                "• ".green(),
                similar_id,
                "not in catalog".yellow()
            ),
        },
        None => println!("{}Most similar: {}", "• ".green(), "none".dimmed()),
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &VideoCatalog, title: &str, json: bool) -> Result<()> {
    let matches: Vec<&Video> = catalog.search_title(title).into_iter().take(20).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  {}", "no matches".dimmed());
    }
    for video in matches {
        println!("  {}", describe(video));
    }
    Ok(())
}

/// Handle the 'validate' command
fn handle_validate(catalog: &VideoCatalog) -> Result<()> {
    let dangling = catalog.dangling_references();
    let without_similar = catalog
        .video_ids()
        .into_iter()
        .filter_map(|id| catalog.get_video(id))
        .filter(|video| video.most_similar_id.is_none())
        .count();

    println!("{}", "Catalog summary:".bold().blue());
    println!("{}Videos: {}", "• ".cyan(), catalog.len());
    println!("{}Without a similar video: {}", "• ".cyan(), without_similar);
    println!("{}Dangling similar references: {}", "• ".cyan(), dangling.len());
    for reference in &dangling {
        println!(
            "  - video {} points at {} ({})",
            reference.video_id,
            reference.missing_id,
            "missing".yellow()
        );
    }
    Ok(())
}

/// One-line description of a video: id, title and similar link
fn describe(video: &Video) -> String {
    let similar = video
        .most_similar_id
        .map(|id| format!(" -> {}", id))
        .unwrap_or_default();
    format!("[{}] {}{}", video.id, video.title, similar)
}

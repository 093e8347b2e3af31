//! Command-line recommendations for a single title.
//!
//! Usage:
//!   cargo run --bin recommend -- --dataset data/anime_recommendations.json "Cowboy Bebop"
//!
//! List the catalogue instead:
//!   cargo run --bin recommend -- --dataset data/anime.bin --list

use anirec::application::service::{
    ItemRead, ItemRecommend, RecommendDefaults, RecommendRequest, RecommendService, ServiceConfig,
    ValidatedRecommendQuery,
};
use anirec::infrastructure::storage::{open_dataset_source, DatasetFormat};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recommend")]
#[command(about = "Top-k similar titles from a precomputed similarity matrix")]
struct Args {
    /// Selected title (exact, case-sensitive)
    title: Option<String>,

    /// Dataset file (JSON or binary snapshot)
    #[arg(short, long, default_value = "data/anime_recommendations.json")]
    dataset: PathBuf,

    /// Dataset encoding; inferred from the extension when omitted
    #[arg(long)]
    format: Option<DatasetFormat>,

    /// Number of recommendations
    #[arg(short, long, default_value = "10")]
    k: usize,

    /// Print every title and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let format = args
        .format
        .unwrap_or_else(|| DatasetFormat::infer(&args.dataset));
    let source = open_dataset_source(&args.dataset, format);
    let config = ServiceConfig {
        default_k: args.k.max(1),
        max_k: args.k.max(1),
    };
    let service = RecommendService::load(config, source.as_ref())?;

    if args.list {
        let (total, items) = service.list(0, usize::MAX);
        for item in items {
            println!("{:>6}  {}  [{}]", item.index_id, item.title, item.genre);
        }
        println!("{} titles", total);
        return Ok(());
    }

    let Some(title) = args.title else {
        return Err("a title is required unless --list is given".into());
    };
    let query = ValidatedRecommendQuery::from_request(
        RecommendRequest {
            title,
            k: Some(args.k),
        },
        service.default_k(),
        service.max_k(),
    )?;

    let selected = service.get(&query.title)?;
    println!("Selected: {}", selected.title);
    println!("Genre:    {}", selected.genre);
    println!();

    let hits = service.recommend(query)?;
    if hits.is_empty() {
        println!("No recommendations available.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<48}  {:<40}  {:>6}",
        "rank", "title", "genre", "score"
    );
    for hit in hits {
        println!(
            "{:>4}  {:<48}  {:<40}  {:>6.3}",
            hit.rank, hit.title, hit.genre, hit.score
        );
    }
    Ok(())
}

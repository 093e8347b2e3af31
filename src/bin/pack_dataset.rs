use anirec::domain::ports::DatasetSource;
use anirec::infrastructure::storage::{BinaryDatasetSource, JsonDatasetSource};
use std::env;
use std::error::Error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let json_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("data/anime_recommendations.json");
    let snapshot_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("data/anime_recommendations.bin");

    let dataset = JsonDatasetSource::new(json_path).load()?;
    BinaryDatasetSource::new(snapshot_path).save(&dataset)?;

    tracing::info!(
        items = dataset.len(),
        from = json_path,
        to = snapshot_path,
        "packed dataset"
    );
    Ok(())
}

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod collector;
mod error;
mod summary;
mod tcg;
mod utils;

use collector::Collector;
use error::AppError;
use tcg::arena::convert_cards;
use tcg::optcg::{sources, OptcgApi, Source};
use utils::http::{CardSource, HttpCardSource};

/// Generate a TCG Arena card list from the One Piece card game API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the generated card list
    #[arg(short, long, default_value = "CardList.json")]
    output: PathBuf,

    /// Base URL of the card API
    #[arg(long, default_value_t = OptcgApi::get_api_url().to_string())]
    base_url: String,

    /// Pause between per-set requests when a bulk endpoint is unavailable, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Timeout for each request, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

async fn run(args: Args) -> Result<(), AppError> {
    let source = HttpCardSource::new(&args.base_url, Duration::from_secs(args.timeout_secs))
        .map_err(AppError::Client)?;

    info!("Collecting cards from {}", args.base_url);
    generate_card_list(
        &source,
        &sources(),
        Duration::from_millis(args.delay_ms),
        &args.output,
    )
    .await?;

    println!(
        "\nDone! Host {} and paste the URL into TCG Arena.",
        args.output.display()
    );
    Ok(())
}

/// Collect, convert and write the card list. Returns the summary of what was
/// written; fails with `NoCards` when no source produced anything.
async fn generate_card_list<S: CardSource>(
    source: &S,
    sources: &[Source],
    delay: Duration,
    output: &Path,
) -> Result<summary::Summary, AppError> {
    let mut raw_cards = Collector::new(source, delay).collect(sources).await;

    if raw_cards.is_empty() {
        return Err(AppError::NoCards);
    }

    summary::sort_cards(&mut raw_cards);

    println!(
        "\nConverting {} cards to TCG Arena format...",
        raw_cards.len()
    );
    let card_list = convert_cards(&raw_cards);

    utils::files::write_card_list(output, &card_list)?;
    println!("\nWrote {} cards to {}", card_list.len(), output.display());

    let summary = summary::Summary::from_cards(&card_list);
    summary.print();
    Ok(summary)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("{}", "=".repeat(60));
    println!("  One Piece TCG -> TCG Arena Card List Generator");
    println!("{}", "=".repeat(60));

    if let Err(e) = run(args).await {
        eprintln!("\n{}", e);
        std::process::exit(1);
    }
}

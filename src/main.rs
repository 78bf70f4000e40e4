mod aggregator;
mod cache;
mod config;
mod engine;
mod limiter;
mod models;
mod notifier;
mod source;
mod storage;
mod types;

use std::io::stderr;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, trace};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cache::MokaCacheStore;
use crate::config::PipelineConfig;
use crate::engine::SummaryPipeline;
use crate::limiter::AdmissionController;
use crate::notifier::{BroadcastNotifier, ConsoleNotifier, FileNotifier};
use crate::storage::{CsvSourceStore, TransactionLedger};

const USAGE: &str = "Usage: transaction-digest [input].csv [log_level:optional] [runs:optional] > [summary].txt";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let config = PipelineConfig::from_env()?;

    //NOTE: The positional path takes precedence over CSV_FILE_PATH
    let Some(path) = args.get(1).cloned().or_else(|| config.source_path.clone()) else {
        eprintln!("{USAGE}");
        eprintln!("The input may also be set with CSV_FILE_PATH. Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    };

    let runs = match args.get(3).map(|s| s.parse::<usize>()) {
        None => 1,
        Some(Ok(runs)) if runs > 0 => runs,
        Some(_) => {
            eprintln!("Invalid run count '{}', expected a positive integer", args[3]);
            exit(1);
        }
    };

    let ledger = Arc::new(TransactionLedger::new());
    let limiter = Arc::new(AdmissionController::new(config.admission));
    let pipeline = SummaryPipeline::new(
        path,
        Arc::new(CsvSourceStore::new(ledger.clone())),
        Arc::new(MokaCacheStore::new(config.cache_capacity)),
        Arc::new(build_notifier(&config)),
        limiter.clone()
    )
        .with_timeout(config.timeout)
        .with_cache_ttl(config.cache_ttl);

    info!("Admission budget: {:?}, [{}] available", limiter.config(), limiter.available());

    for run in 1..=runs {
        let timer = Instant::now();

        if let Err(error) = pipeline.process_transactions().await {
            error!("Run [{run}] failed: {error}");
            eprintln!("{error}");
            exit(1);
        }

        info!("Run [{run}] completed in: {:?}", timer.elapsed());
    }

    info!("Ledger holds [{}] persisted transactions", ledger.len());

    for entry in ledger.iter() {
        let persisted = entry.value();
        trace!("Ledger entry [{}]: {} {}", persisted.ledger_id, persisted.date, persisted.amount);
    }

    Ok(())
}

fn build_notifier(config: &PipelineConfig) -> BroadcastNotifier {
    let notifier = BroadcastNotifier::new().with_target(ConsoleNotifier);

    match &config.output_path {
        Some(path) => notifier.with_target(FileNotifier::new(path)),
        None => notifier
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The summary is delivered on stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

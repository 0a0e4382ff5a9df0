mod analyzer;
mod config;
mod fetcher;
mod model;
mod notifier;
mod parser;
mod utils;

use crate::analyzer::trend::Analyzer;
use analyzer::TrendAnalyzer;
use config::{load_config, AppConfig, QueryConfig};
use fetcher::{CoinGeckoFetcher, MarketFetcher};
use futures::future::join_all;
use model::{FetchError, RangeRequest};
use notifier::{render_report, TelegramNotifier};
use parser::{MarketChartParser, Parser};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file (path overridable as first argument)
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: Arc<AppConfig> = match load_config(&config_path) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let fetcher = CoinGeckoFetcher::new();
    let parser = MarketChartParser::new();
    let analyzer = TrendAnalyzer::new();

    // Initialize notifier (Telegram) when configured
    let notifier = config
        .telegram
        .as_ref()
        .map(|tg| Arc::new(TelegramNotifier::new(tg.bot_token.clone(), tg.chat_id)));

    info!("🚀 CoinSniper started!");
    info!("Queries to process: {}", config.queries.len());

    // Process all queries concurrently
    let tasks: Vec<_> = config
        .queries
        .iter()
        .map(|query| {
            process_query(
                query,
                &fetcher,
                &parser,
                &analyzer,
                config.clone(),
                notifier.clone(),
            )
        })
        .collect();
    join_all(tasks).await;

    info!("All queries processed.");
}

/// Processes a single query, performing fetching, parsing, analysis and
/// reporting. Each failure maps to its own user-facing message, so a broken
/// connection never reads like a broken payload.
async fn process_query(
    query: &QueryConfig,
    fetcher: &CoinGeckoFetcher,
    parser: &MarketChartParser,
    analyzer: &TrendAnalyzer,
    config: Arc<AppConfig>,
    notifier: Option<Arc<TelegramNotifier>>,
) {
    info!(
        "Processing query: {} [{} – {}]",
        query.coin_id, query.start_date, query.end_date
    );
    let request = RangeRequest {
        coin_id: query.coin_id.clone(),
        vs_currency: config.vs_currency.clone(),
        start: query.start_date,
        end: query.end_date,
    };

    info!("Fetching market chart...");
    let json = match fetcher.fetch(&request).await {
        Ok(json) => json,
        Err(FetchError::InvalidDateRange) => {
            error!(
                "{}: your end date must be later than your start date!",
                query.coin_id
            );
            return;
        }
        Err(FetchError::BadStatus(code)) => {
            warn!(
                "{}: the API refused the request (status {})",
                query.coin_id, code
            );
            return;
        }
        Err(e) => {
            warn!(
                "{}: there's something wrong with the internet connection! ({})",
                query.coin_id, e
            );
            return;
        }
    };

    info!("Parsing market chart...");
    let series = match parser.parse(&json) {
        Ok(s) => s,
        Err(e) => {
            warn!("{}: unexpected data shape: {}", query.coin_id, e);
            return;
        }
    };

    info!(
        "Analyzing {} price and {} volume samples...",
        series.prices.len(),
        series.volumes.len()
    );
    let report = match analyzer.analyze(&series.prices, &series.volumes) {
        Ok(r) => r,
        Err(e) => {
            warn!("{}: analysis failed: {}", query.coin_id, e);
            return;
        }
    };

    let text = render_report(&query.coin_id, &config.vs_currency, &report);
    println!("{}\n", text);

    if let Some(notifier) = notifier {
        info!("Sending Telegram notification...");
        if let Err(e) = notifier.notify_text(&text).await {
            warn!("Telegram send error: {:?}", e);
        }
    }

    info!("Finished query: {}", query.coin_id);
}

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trend_pulse::config::Config;
use trend_pulse::dashboard::{DashboardStats, SentimentFilter, SortBy, StatsDelta, TopicSearch};
use trend_pulse::pipeline::{Category, PipelineClient, PipelineData, Topic};

/// Trend Pulse: social-media trend analysis from the command line.
#[derive(Parser)]
#[command(name = "trend-pulse", version, about, long_about = None)]
struct Cli {
    /// Search query sent to the pipeline (overrides PIPELINE_QUERY).
    #[arg(short, long, global = true)]
    query: Option<String>,

    /// Number of posts the pipeline should fetch (overrides PIPELINE_LIMIT).
    #[arg(short, long, global = true)]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Headline stats, categories and trending topics (default).
    Dashboard {
        /// Refetch every SECS seconds and print the change in headline stats,
        /// until interrupted.
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        watch: Option<u64>,
    },
    /// The full adapted categories, topics and posts.
    Data,
    /// One category with its topics and aggregated sentiment.
    Category {
        /// Category id.
        id: String,
    },
    /// One topic with its category and posts.
    Topic {
        /// Topic id.
        id: String,
        /// Print a shareable report instead of the raw detail.
        #[arg(long)]
        report: bool,
    },
    /// Filter and sort topics.
    Search {
        /// Text matched against topic names and descriptions.
        #[arg(short, long)]
        text: Option<String>,
        /// Only topics in this category id.
        #[arg(short, long)]
        category: Option<String>,
        /// all, positive, negative or neutral.
        #[arg(long, default_value = "all")]
        sentiment: SentimentFilter,
        /// relevance, engagement, tweets or sentiment.
        #[arg(long, default_value = "relevance")]
        sort: SortBy,
    },
}

#[derive(Serialize)]
struct DashboardView<'a> {
    query: &'a str,
    stats: DashboardStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<StatsDelta>,
    categories: &'a [Category],
    topics: &'a [Topic],
}

impl<'a> DashboardView<'a> {
    fn new(query: &'a str, data: &'a PipelineData) -> Self {
        Self {
            query,
            stats: DashboardStats::from_data(data),
            changes: None,
            categories: &data.categories,
            topics: &data.topics,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(query) = cli.query {
        config.query = query;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    config.validate().context("Invalid configuration")?;

    info!(
        base_url = %config.pipeline_base_url,
        query = %config.query,
        limit = config.limit,
        "Configuration loaded"
    );

    let client = PipelineClient::from_config(&config).context("Failed to build pipeline client")?;
    let data = client
        .fetch_pipeline_data(config.limit, &config.query)
        .await
        .context("Failed to fetch pipeline data")?;

    match cli.command.unwrap_or(Command::Dashboard { watch: None }) {
        Command::Dashboard { watch: None } => print_json(&DashboardView::new(&config.query, &data)),
        Command::Dashboard { watch: Some(secs) } => {
            watch_dashboard(&client, &config, data, Duration::from_secs(secs)).await
        }
        Command::Data => print_json(&data),
        Command::Category { id } => {
            let detail = data
                .category_detail(&id)
                .with_context(|| format!("Category '{id}' not found"))?;
            print_json(&detail)
        }
        Command::Topic { id, report } => {
            let detail = data
                .topic_detail(&id)
                .with_context(|| format!("Topic '{id}' not found"))?;
            if report {
                print_json(&detail.report(chrono::Utc::now()))
            } else {
                print_json(&detail)
            }
        }
        Command::Search {
            text,
            category,
            sentiment,
            sort,
        } => {
            let search = TopicSearch {
                text,
                category_id: category,
                sentiment,
                sort,
            };
            print_search(&search, &data)
        }
    }
}

/// Print the dashboard, then refetch on every tick and print it again with the
/// change since the previous snapshot. Failed refreshes are logged and skipped.
async fn watch_dashboard(
    client: &PipelineClient,
    config: &Config,
    initial: PipelineData,
    every: Duration,
) -> Result<()> {
    print_json(&DashboardView::new(&config.query, &initial))?;
    let mut previous = DashboardStats::from_data(&initial);

    info!(interval_secs = every.as_secs(), "Watching dashboard");

    let mut interval = tokio::time::interval(every);
    interval.tick().await; // The first tick is immediate; the initial fetch covers it

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let data = match client.fetch_pipeline_data(config.limit, &config.query).await {
                    Ok(data) => data,
                    Err(e) => {
                        warn!(error = %e, "Dashboard refresh failed");
                        continue;
                    }
                };
                let mut view = DashboardView::new(&config.query, &data);
                view.changes = Some(view.stats.delta_since(&previous));
                print_json(&view)?;
                previous = view.stats;
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                info!("Stopping dashboard watch");
                return Ok(());
            }
        }
    }
}

fn print_search(search: &TopicSearch, data: &PipelineData) -> Result<()> {
    let results = search.apply(&data.topics);
    info!(
        matches = results.len(),
        filtered = search.has_active_filters(),
        "Search complete"
    );
    print_json(&results)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,trend_pulse=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // Logs go to stderr so stdout stays machine-readable
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

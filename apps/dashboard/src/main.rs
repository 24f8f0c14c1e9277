use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use tradedesk_analytics::{report, TradeFrame};
use tradedesk_api::DashboardClient;
use tradedesk_charts::pivot::TrendPivot;
use tradedesk_charts::{price, summary, trend, ChartOptions};

mod data_gen;

const API_URL_VAR: &str = "TRADEDESK_API_URL";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the dashboard API (overrides TRADEDESK_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory chart files are written to
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch both endpoints and render the buy/sell trend and volume charts
    Render,

    /// Render the daily average price chart for one symbol
    Trend {
        #[arg(long)]
        symbol: String,
    },

    /// List all symbols known to the server
    Symbols,

    /// Show the best symbol by traded value and the most traded symbol
    Leaders,

    /// Print the console analytics report from a trades CSV
    Report {
        #[arg(long, default_value = "trades.csv")]
        csv: PathBuf,
    },

    /// Generate a demo trades CSV
    Generate {
        #[arg(long, default_value = "45")]
        days: u32,

        #[arg(long, default_value = "200")]
        trades_per_day: u32,

        #[arg(long, default_value = "trades.csv")]
        out: PathBuf,
    },
}

fn api_url(cli_override: Option<String>) -> String {
    cli_override
        .or_else(|| std::env::var(API_URL_VAR).ok())
        .unwrap_or_else(|| tradedesk_api::DEFAULT_BASE_URL.to_string())
}

/// The buy/sell trend page. Failures propagate to the caller; there is no
/// local recovery path.
async fn render_trend_chart(client: &DashboardClient, out_dir: &Path) -> anyhow::Result<()> {
    let rows = client
        .get_buy_sell_trend()
        .await
        .context("Failed to fetch buy/sell trend data")?;

    let pivot = TrendPivot::from_rows(&rows);
    let options = ChartOptions::builder()
        .out_path(out_dir.join("buy_sell_chart.svg"))
        .build();
    trend::render_buy_sell_chart(&pivot, &options)?;

    println!(
        "Rendered {} series over {} dates to {}",
        pivot.series.len() * 2,
        pivot.dates.len(),
        options.out_path.display()
    );
    Ok(())
}

/// The volume summary page. Fetch and render failures are logged and
/// swallowed; the chart file is simply left unwritten.
async fn render_summary_chart(client: &DashboardClient, out_dir: &Path) {
    let options = ChartOptions::builder()
        .out_path(out_dir.join("volume_chart.svg"))
        .build();

    match client.get_summary().await {
        Ok(items) => match summary::render_volume_chart(&items, &options) {
            Ok(()) => println!(
                "Rendered volume chart for {} symbols to {}",
                items.len(),
                options.out_path.display()
            ),
            Err(err) => eprintln!("Error loading chart data: {}", err),
        },
        Err(err) => eprintln!("Error loading chart data: {}", err),
    }
}

async fn render_symbol_trend(
    client: &DashboardClient,
    symbol: &str,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let rows = client
        .get_symbol_trend(symbol)
        .await
        .with_context(|| format!("Failed to fetch trend data for {}", symbol))?;

    let options = ChartOptions::builder()
        .out_path(out_dir.join(format!("{}_trend.svg", symbol.to_lowercase())))
        .build();
    price::render_price_trend_chart(symbol, &rows, &options)?;

    println!(
        "Rendered {} trend points for {} to {}",
        rows.len(),
        symbol,
        options.out_path.display()
    );
    Ok(())
}

fn print_report(csv: &Path) -> anyhow::Result<()> {
    let frame = TradeFrame::from_csv(csv)
        .with_context(|| format!("Failed to load trades from {}", csv.display()))?;

    println!("Summary per stock:");
    report::table_from_frame(&frame.summary()?)?.printstd();

    println!("\nBusiest trading day overall:");
    report::table_from_frame(&frame.busiest_day()?)?.printstd();

    println!("\nBusiest day per stock:");
    report::table_from_frame(&frame.busiest_day_per_symbol()?)?.printstd();

    println!("\nBest symbol by traded value:");
    report::table_from_frame(&frame.best_symbol()?)?.printstd();

    println!("\nMost frequently traded symbol:");
    report::table_from_frame(&frame.most_traded()?)?.printstd();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    match args.command {
        Command::Render => {
            let client = DashboardClient::new(&api_url(args.api_url));
            std::fs::create_dir_all(&args.out_dir).with_context(|| {
                format!("Failed to create output directory {}", args.out_dir.display())
            })?;

            // The two pages are independent; a failing trend fetch must not
            // keep the volume chart from rendering.
            let trend_result = render_trend_chart(&client, &args.out_dir).await;
            render_summary_chart(&client, &args.out_dir).await;
            trend_result?;
        }

        Command::Trend { symbol } => {
            let client = DashboardClient::new(&api_url(args.api_url));
            std::fs::create_dir_all(&args.out_dir).with_context(|| {
                format!("Failed to create output directory {}", args.out_dir.display())
            })?;

            render_symbol_trend(&client, &symbol, &args.out_dir).await?;
        }

        Command::Symbols => {
            let client = DashboardClient::new(&api_url(args.api_url));
            let symbols = client
                .get_symbols()
                .await
                .context("Failed to fetch symbol list")?;

            for symbol in symbols {
                println!("{}", symbol);
            }
        }

        Command::Leaders => {
            let client = DashboardClient::new(&api_url(args.api_url));
            let best = client
                .get_best_symbol()
                .await
                .context("Failed to fetch best symbol")?;
            let most = client
                .get_most_traded()
                .await
                .context("Failed to fetch most traded symbol")?;

            println!("Best symbol by traded value: {} (${:.2})", best.symbol, best.total_value);
            println!("Most traded symbol: {} ({} trades)", most.symbol, most.trades);
        }

        Command::Report { csv } => print_report(&csv)?,

        Command::Generate {
            days,
            trades_per_day,
            out,
        } => {
            let trades = data_gen::generate_trades(&mut rand::thread_rng(), days, trades_per_day);
            data_gen::write_csv(&trades, &out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Generated {} trades into {}", trades.len(), out.display());
        }
    }

    Ok(())
}

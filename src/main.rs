use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use tracebay::core::catalogue::CATALOGUE;
use tracebay::core::config::{self, CliOverrides, TracebayConfig};
use tracebay::core::view::Tab;

#[derive(Parser)]
#[command(name = "tracebay", about = "Browse, tweak and list PCB templates")]
struct Args {
    /// Category selected at startup (e.g. Power, Robotics)
    #[arg(short, long)]
    category: Option<String>,

    /// Simulated catalogue fetch time in milliseconds
    #[arg(long)]
    loading_delay_ms: Option<u64>,

    /// Tab shown at startup
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Disable screen transitions
    #[arg(long)]
    no_animations: bool,

    /// Print the catalogue as JSON and exit
    #[arg(long)]
    dump_catalogue: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.dump_catalogue {
        let json = serde_json::to_string_pretty(CATALOGUE)?;
        println!("{json}");
        return Ok(());
    }

    // Initialize file logger - writes to tracebay.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("tracebay.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        TracebayConfig::default()
    });
    let cli = CliOverrides {
        category: args.category,
        loading_delay_ms: args.loading_delay_ms,
        start_tab: args.tab,
        no_animations: args.no_animations,
    };
    let resolved = config::resolve(&file_config, &cli);

    info!(
        "Tracebay starting up (category={}, tab={:?}, loading={}ms)",
        resolved.default_category,
        resolved.start_tab,
        resolved.loading_delay.as_millis()
    );

    let result = tracebay::tui::run(resolved);
    if let Err(e) = &result {
        error!("Terminal error: {}", e);
    }
    result
}

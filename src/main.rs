use clap::Parser;
use finbot_media::{FbClient, HfInference, InferenceConfig, TickerSession};
use tracing_subscriber::EnvFilter;

/// Financial report generation tool.
#[derive(Parser, Debug)]
#[command(name = "finbot", version, long_about = None)]
struct Args {
    /// Command to execute (analyze)
    command: String,
    /// Stock ticker symbol
    ticker: String,
}

fn init_tracing() {
    // Logs go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    if args.command != "analyze" {
        println!("Invalid command");
        return Ok(());
    }

    let client = FbClient::new()?;
    let models = HfInference::new(InferenceConfig::from_env()?)?;

    let mut session = TickerSession::new(args.ticker);
    session.fetch_news(&client).await?;
    session.summarize_and_analyze(&models, &models).await?;
    session.display()?;

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use rowbind_config::RowbindConfig;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rowbind error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    let config = RowbindConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing(flags.quiet, flags.verbose, &config.log.filter)?;

    let ctx = context::AppContext::init(config, &flags)
        .await
        .context("failed to initialize rowbind application context")?;

    let response = commands::dispatch(cli.command, &ctx).await?;
    output::output(&response, flags.format)
}

/// `--quiet`/`--verbose` win over `log.filter` (`ROWBIND_LOG__FILTER` in the env).
fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .with_context(|| format!("invalid log filter '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

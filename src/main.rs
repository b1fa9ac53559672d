use anyhow::Result;
use clap::Parser;
use splitzip::cli::{run, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::info!(config = %cli.config.display(), "Arguments parsed, starting run");

    match run(cli) {
        Ok(report) => {
            tracing::info!(failed = report.failed(), "Run finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            Err(e)
        }
    }
}

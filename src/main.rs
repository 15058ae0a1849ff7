// Entrypoint for the CLI application.
// - Keeps `main` small: read the environment once, build the client and hand
//   the file list to the UI loop.
// - Returns `anyhow::Result` so setup errors print with their context.

use clap::Parser;
use reducer_post::{api::UploadClient, config::Config, ui::upload_all};
use std::path::PathBuf;
use std::process::ExitCode;

/// Post .js, .css and .less files to a reducer service and print its replies.
///
/// The service address is taken from REDUCER_SERVER (default localhost:8888).
#[derive(Parser)]
#[command(name = "reducer-post", version)]
struct Cli {
    /// Files to post; the suffix selects /js, /css or /less
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = Config::from_env();
    log::debug!("Posting to {}", config.server());
    let client = UploadClient::new(&config)?;

    let stdout = std::io::stdout();
    let summary = upload_all(&client, &cli.files, &mut stdout.lock())?;
    log::info!(
        "{} uploaded, {} skipped, {} failed",
        summary.uploaded,
        summary.skipped,
        summary.failed
    );

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

// UI layer: the per-file run loop. Results go to the given writer (stdout in
// the binary); diagnostics for skipped and failed files go through `log`.

use crate::api::{UploadClient, UploadResponse};
use crate::form;
use crate::route::route_for;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Aggregate outcome of one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub uploaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    /// Unsupported file types do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Post every argument in order, printing one status/body block per file.
///
/// A file that cannot be read or sent is reported and the loop moves on; only
/// a failure to write to `out` aborts the run.
pub fn upload_all<P: AsRef<Path>>(
    client: &UploadClient,
    files: &[P],
    out: &mut impl Write,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for arg in files {
        let arg = arg.as_ref();
        let Some(route) = route_for(arg) else {
            log::debug!("Skipping {}: unsupported file type", arg.display());
            writeln!(out, "Invalid file type {}", arg.display())?;
            summary.skipped += 1;
            continue;
        };
        log::debug!("{} -> {}", arg.display(), route.path);

        match upload_one(client, arg, route.path) {
            Ok(res) => {
                print_response(out, &res)?;
                summary.uploaded += 1;
            }
            Err(e) => {
                log::error!("Failed to upload {}: {:#}", arg.display(), e);
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

fn upload_one(client: &UploadClient, arg: &Path, path: &str) -> Result<UploadResponse> {
    let contents =
        std::fs::read(arg).with_context(|| format!("Failed to read {}", arg.display()))?;
    if contents.is_empty() {
        log::warn!("{} is empty; the server will likely reject it", arg.display());
    }
    let body = form::encode(&contents);

    // Only drawn when stderr is a terminal.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Uploading {}...", arg.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let res = client.post_form(path, body);
    spinner.finish_and_clear();
    res
}

/// Status line, raw body, then a blank line.
fn print_response(out: &mut impl Write, res: &UploadResponse) -> Result<()> {
    writeln!(out, "{}", res.status_line())?;
    out.write_all(&res.body)?;
    writeln!(out)?;
    writeln!(out)?;
    Ok(())
}

//! CLI parsing and orchestration. Parses args, runs harvest -> JSON file. Maps errors to exit codes.

use crate::config;
use crate::fetch::{gateway::GatewayBible, harvest, FetchError, GatewayClient, HarvestOptions};
use crate::output::{write_json, OutputError};
use clap::Parser;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TRANSLATION: &str = "NRSV";

/// CLI error carrying exit code and message.
#[derive(Debug, Error)]
pub enum CliRunError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Output(#[from] OutputError),
}

impl CliRunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliRunError::InvalidInput(_) => 1,
            CliRunError::Fetch(_) => 2,
            CliRunError::Output(_) => 3,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "otharvest")]
#[command(about = "Fetch Old Testament chapter text from Bible Gateway and write JSON")]
#[command(
    after_help = "Optional config file ./otharvest.toml (or <config dir>/otharvest/config.toml) may set output_dir, user_agent, timeout_secs, and translation. CLI flags override config."
)]
pub struct Args {
    /// Output path. Default: ./ot_<translation>.json (e.g. ot_nrsv.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Translation code (Bible Gateway version), e.g. NRSV, ESV, KJV.
    #[arg(short, long)]
    pub translation: Option<String>,

    /// Harvest a single book instead of the whole Old Testament, e.g. "Genesis" or "1 Samuel".
    #[arg(long)]
    pub book: Option<String>,

    /// HTTP User-Agent (overrides config).
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (overrides config; default 30).
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Suppress progress output (errors only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print verbose error chain.
    #[arg(long)]
    pub verbose: bool,
}

/// Default output path: ot_<lowercase translation>.json under the output directory.
fn default_output_path(output_dir: &Path, translation: &str) -> PathBuf {
    output_dir.join(format!("ot_{}.json", translation.to_lowercase()))
}

/// Ensure output path parent exists; return error before any fetching is wasted.
fn validate_output_path(path: &Path) -> Result<(), CliRunError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(CliRunError::InvalidInput(format!(
                "Cannot write output: {}: parent directory does not exist.",
                path.display()
            )));
        }
    }
    Ok(())
}

/// Entry point for the CLI. Returns Ok(()) on success; Err with exit code and message on failure.
pub fn run(args: &Args) -> Result<(), CliRunError> {
    let config = config::load_config().map_err(CliRunError::InvalidInput)?;

    let translation = args
        .translation
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.translation.clone()))
        .unwrap_or_else(|| DEFAULT_TRANSLATION.to_string());

    let effective_output_dir: PathBuf = config
        .as_ref()
        .and_then(|c| c.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    let timeout_secs = args
        .timeout
        .or_else(|| config.as_ref().and_then(|c| c.timeout_secs))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let user_agent = args
        .user_agent
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.user_agent.clone()));

    let mut builder = GatewayClient::builder().timeout_secs(timeout_secs);
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    let mut client = builder
        .build()
        .map_err(|e| CliRunError::InvalidInput(format!("Failed to create HTTP client: {}", e)))?;

    // Translation validation happens here; an unknown code is fatal before any fetch.
    let mut bible = GatewayBible::new(&mut client, &translation).map_err(|e| match e {
        FetchError::UnsupportedTranslation { .. } => CliRunError::InvalidInput(e.to_string()),
        other => CliRunError::Fetch(other),
    })?;
    let translation = bible.translation().to_string();

    let output_path = match &args.output {
        Some(p) => p.clone(),
        None => default_output_path(&effective_output_dir, &translation),
    };
    validate_output_path(&output_path)?;

    let progress_state: RefCell<Option<indicatif::ProgressBar>> = RefCell::new(None);
    let progress_cb = |n: u32, total: u32| {
        if total == 0 {
            return;
        }
        let mut state = progress_state.borrow_mut();
        let pb = state.get_or_insert_with(|| {
            let bar = indicatif::ProgressBar::new(total as u64);
            bar.set_style(
                indicatif::ProgressStyle::default_bar()
                    .template("{spinner} {msg} [{bar:40}] {pos}/{len} ({elapsed})")
                    .unwrap()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .progress_chars("█▉▊▋▌▍▎▏ "),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        });
        pb.set_position(n as u64);
        pb.set_message(format!("Fetching chapter {}/{}", n, total));
    };
    let progress: Option<&dyn Fn(u32, u32)> = if args.quiet { None } else { Some(&progress_cb) };

    let options = HarvestOptions {
        progress,
        book: args.book.as_deref(),
    };
    let records = harvest(&mut bible, &translation, &options).map_err(|e| match e {
        FetchError::UnknownBook { .. } => CliRunError::InvalidInput(e.to_string()),
        other => CliRunError::Fetch(other),
    })?;

    if let Some(pb) = progress_state.borrow_mut().take() {
        pb.disable_steady_tick();
        pb.finish_and_clear();
    }

    if records.is_empty() {
        return Err(CliRunError::Fetch(FetchError::NoChaptersRetrieved));
    }

    write_json(&records, &output_path)?;

    if !args.quiet {
        eprintln!("Wrote {} chapters to {}", records.len(), output_path.display());
    }
    Ok(())
}

//! convosync: merge two conversation logs into one continuous session
//!
//! `convosync <OLD> <NEW> [OUTPUT]` puts the older conversation (device A)
//! in front of the newer one (device B), moves every record into one
//! session and links the newer log's first message onto the older log's
//! last one. OUTPUT defaults to NEW, which is overwritten.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use convosync_core::{load_conversation, merge_with_report, save_conversation, ConvoSyncConfig};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "convosync",
    version,
    about = "Merge an older conversation log into a newer one",
    after_help = "Output defaults to NEW (overwrites)."
)]
struct Cli {
    /// Older conversation (.jsonl), placed first
    old: PathBuf,

    /// Newer conversation (.jsonl), whose session id is kept by default
    new: PathBuf,

    /// Where to write the merged conversation
    output: Option<PathBuf>,

    /// Session id for every merged record (overrides config)
    #[arg(long, env = "CONVOSYNC_SESSION_ID")]
    session_id: Option<String>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(self.new.as_path())
    }

    /// Log filter used when `RUST_LOG` is unset. `--quiet` drops it to errors.
    fn default_log_filter<'a>(&self, config: &'a ConvoSyncConfig) -> &'a str {
        if self.quiet {
            "error"
        } else {
            &config.logging.level
        }
    }
}

// ============================================================================
// Merge command
// ============================================================================

fn run(cli: &Cli, config: &ConvoSyncConfig) -> anyhow::Result<()> {
    let say = |msg: String| {
        if !cli.quiet {
            println!("{}", msg);
        }
    };

    say(format!("Loading old conversation: {}", cli.old.display()));
    let old = load_conversation(&cli.old).context("reading old conversation")?;

    say(format!("Loading new conversation: {}", cli.new.display()));
    let new = load_conversation(&cli.new).context("reading new conversation")?;

    let target = cli
        .session_id
        .as_deref()
        .or(config.merge.session_id.as_deref());
    let merged = merge_with_report(&old, &new, target).context("merging conversations")?;
    let report = &merged.report;

    say(String::new());
    say("Merging conversations:".to_string());
    say(format!("  Old: {} messages", report.first_count));
    say(format!("  New: {} messages", report.second_count));
    match &report.target_session_id {
        Some(id) => say(format!("  Target session ID: {}", id)),
        None => say("  One side is empty, kept the other unchanged".to_string()),
    }
    if report.linked {
        say("  Linked new conversation start to old conversation end".to_string());
    }
    say(format!("  Result: {} total messages", report.total()));

    let output = cli.output_path();
    tracing::debug!(output = %output.display(), "Writing merged conversation");
    save_conversation(output, &merged.records)
        .with_context(|| format!("writing merged conversation to {}", output.display()))?;

    say(String::new());
    say(format!("Saved to: {}", output.display()));
    say(format!(
        "Merge complete! {} old + {} new = {} total",
        report.first_count,
        report.second_count,
        report.total()
    ));

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let config = match ConvoSyncConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("convosync: failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout only carries the summary
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter(&config)));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &config) {
        eprintln!("convosync: {:#}", e);
        std::process::exit(1);
    }
}

// ============================================================================
// Tests
// ============================================================================

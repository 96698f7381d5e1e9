mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use config::ConfigMerger;
use hebfix_core::adapters::FsRecordStore;
use hebfix_core::run_fix;
use hebfix_core::settings::RunSettings;
use hebfix_render::render_summary;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "hebfix",
    version,
    about = "Detects and reverses back character-reversed Hebrew questions in a JSON dataset."
)]
struct Cli {
    /// JSON data file (default: src/data/sailing_questions.json).
    #[arg(long)]
    data: Option<Utf8PathBuf>,

    /// Config file (default: ./hebfix.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Classify and fix, but do not write the data file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Copy the data file aside before overwriting it.
    #[arg(long, default_value_t = false)]
    backup: bool,

    /// Print a unified diff of the data file after the summary (stderr with --format json).
    #[arg(long, default_value_t = false)]
    diff: bool,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cmd_fix(cli)
}

fn cmd_fix(cli: Cli) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(&Utf8PathBuf::from("."))
            .context("load hebfix.toml config")?,
    };
    let merged = ConfigMerger::new(file_config).merge_args(cli.data, cli.backup);
    debug!(
        "merged config: data_path={}, backup_enabled={}, backup_suffix={}",
        merged.data_path, merged.backup_enabled, merged.backup_suffix
    );

    let rules = merged.markers.build().context("build marker rules")?;
    let settings = RunSettings {
        data_path: merged.data_path,
        dry_run: cli.dry_run,
        backup_enabled: merged.backup_enabled,
        backup_suffix: merged.backup_suffix,
        rules,
    };

    let store = FsRecordStore::new(settings.data_path.clone());
    let outcome = run_fix(&settings, &store)?;

    match cli.format {
        OutputFormat::Text => {
            print!("{}", render_summary(&outcome.report));
            if cli.diff {
                print!("{}", outcome.patch());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.report)?);
            // stdout carries only the report
            if cli.diff {
                eprint!("{}", outcome.patch());
            }
        }
    }
    if let Some(backup) = &outcome.backup {
        info!("backed up original to {}", backup);
    }
    Ok(())
}

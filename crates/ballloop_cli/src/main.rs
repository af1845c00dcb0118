//! Ballloop CLI - Headless driver for the ball loader animation
//!
//! Provides:
//! - `init`: write a default `ballloop.toml`
//! - `run`: tick the loader and print frame positions
//! - `sample`: print positions at one explicit progress value

mod config;
mod runner;

use anyhow::{bail, Context, Result};
use ballloop_animation::BallLoader;
use clap::{Parser, Subcommand, ValueEnum};
use config::{BallloopConfig, CONFIG_FILE};
use runner::{FrameReport, RunOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Headless driver for the ball loader animation
#[derive(Parser, Debug)]
#[command(name = "ballloop")]
#[command(about = "Headless driver for the ball loader animation")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default config file
    Init {
        /// File or directory to write to
        #[arg(short, long, default_value = CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Tick the loader and print frame positions
    Run {
        /// Config file or directory containing ballloop.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of ticks to run
        #[arg(short, long, default_value = "100")]
        frames: u64,

        /// Print every n-th frame
        #[arg(short, long, default_value = "1")]
        every: u64,

        /// Pace ticks at the loader's tick rate
        #[arg(long)]
        realtime: bool,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print positions at one progress value
    Sample {
        /// Normalized loop progress in [0, 1]
        #[arg(short, long)]
        progress: f32,

        /// Config file or directory containing ballloop.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Init { path, force } => cmd_init(&path, force),
        Command::Run {
            config,
            frames,
            every,
            realtime,
            format,
        } => {
            let opts = RunOptions {
                frames,
                every,
                realtime,
            };
            cmd_run(config.as_deref(), opts, format)
        }
        Command::Sample {
            progress,
            config,
            format,
        } => cmd_sample(progress, config.as_deref(), format),
    }
}

fn load_config(path: Option<&Path>) -> Result<BallloopConfig> {
    match path {
        Some(path) => BallloopConfig::load(path),
        None => {
            tracing::debug!("No config given, using defaults");
            Ok(BallloopConfig::default())
        }
    }
}

fn print_report(report: &FrameReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    let target = if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    };

    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    let content = BallloopConfig::default().to_toml()?;
    fs::write(&target, content)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    tracing::info!("Wrote {}", target.display());
    Ok(())
}

fn cmd_run(config: Option<&Path>, opts: RunOptions, format: OutputFormat) -> Result<()> {
    let config = load_config(config)?;
    let mut loader = BallLoader::new(config.loader_config()?)?;
    loader.set_viewport(config.viewport())?;

    tracing::info!(
        "Running {} frames at {} ticks/s ({}s loop)",
        opts.frames,
        loader.clock().ticks_per_second(),
        loader.clock().duration_secs()
    );

    runner::run(&mut loader, opts, |report| print_report(report, format))?;
    Ok(())
}

fn cmd_sample(progress: f32, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config)?;
    let report = runner::sample(&config, progress)?;
    print_report(&report, format)
}

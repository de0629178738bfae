//! smokerun - one-shot smoke-test harness
//!
//! Launches the selected demo targets (foreground or daemon), waits a fixed
//! startup duration, drives the client helper, then pattern-kills whatever
//! the daemons left behind.

use anyhow::{Context, Result};
use clap::Parser;
use smokerun_config::{Plan, load_config};
use smokerun_host::UnixHost;
use smokerun_util::{default_bin_dir, default_config_path};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use smokerun::{Runner, Selection};

/// smokerun - launch demo targets and smoke-test them with a client
#[derive(Parser, Debug)]
#[command(name = "smokerun")]
#[command(about = "Launch demo targets and smoke-test them with a client", long_about = None)]
struct Args {
    /// Target names to launch (default: all configured targets)
    targets: Vec<String>,

    /// Configuration file path (default: smokerun.toml next to the binary)
    #[arg(short, long, env = "SMOKERUN_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the target executables
    /// (default: the directory containing smokerun itself)
    #[arg(short, long, env = "SMOKERUN_BIN_DIR")]
    bin_dir: Option<PathBuf>,

    /// Startup wait override, in milliseconds
    #[arg(long)]
    wait_ms: Option<u64>,

    /// Skip the client step (the wait and cleanup still run)
    #[arg(long)]
    no_client: bool,

    /// Leave matching processes running at the end
    #[arg(long)]
    no_cleanup: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Load the plan from the configured file, or fall back to the built-in
/// arrangement when no file was given and none exists next to the binary.
fn load_plan(args: &Args) -> Result<Plan> {
    if let Some(path) = &args.config {
        return load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        load_config(&default_path)
            .with_context(|| format!("Failed to load config from {:?}", default_path))
    } else {
        Ok(Plan::builtin())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "smokerun starting"
    );

    let plan = load_plan(&args)?;

    let bin_dir = args
        .bin_dir
        .clone()
        .or_else(|| plan.bin_dir.clone())
        .unwrap_or_else(default_bin_dir);

    info!(
        bin_dir = %bin_dir.display(),
        target_count = plan.targets.len(),
        "Plan loaded"
    );

    let mut runner = Runner::new(UnixHost::new(), plan, bin_dir);
    if let Some(ms) = args.wait_ms {
        runner = runner.with_startup_wait(Duration::from_millis(ms));
    }
    if args.no_client {
        runner = runner.without_client();
    }
    if args.no_cleanup {
        runner = runner.without_cleanup();
    }

    let selection = Selection::resolve(runner.plan(), &args.targets);
    runner.run(&selection)?;

    info!("smokerun finished");
    Ok(())
}

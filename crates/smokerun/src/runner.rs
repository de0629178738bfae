//! The launch sequence
//!
//! One strictly ordered pass: launch the selected targets, hold the startup
//! wait, drive the client, then pattern-kill leftovers. Any failure before
//! cleanup aborts the run; a failing client still gets its cleanup.

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use smokerun_config::{Plan, Target};
use smokerun_host::{Host, HostError, LaunchCommand};
use smokerun_util::{Result, SmokerunError, resolve_program};

use crate::selection::Selection;

/// Sequences one smoke run over a [`Host`]
pub struct Runner<H: Host> {
    host: H,
    plan: Plan,
    bin_dir: PathBuf,
    run_client: bool,
    run_cleanup: bool,
}

impl<H: Host> Runner<H> {
    pub fn new(host: H, plan: Plan, bin_dir: PathBuf) -> Self {
        Self {
            host,
            plan,
            bin_dir,
            run_client: true,
            run_cleanup: true,
        }
    }

    /// Skip the client step (the wait and cleanup still run)
    pub fn without_client(mut self) -> Self {
        self.run_client = false;
        self
    }

    /// Leave matching processes running at the end
    pub fn without_cleanup(mut self) -> Self {
        self.run_cleanup = false;
        self
    }

    /// Override the startup wait from the plan
    pub fn with_startup_wait(mut self, wait: Duration) -> Self {
        self.plan.startup_wait = wait;
        self
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Run the full sequence for the given selection
    pub fn run(&self, selection: &Selection) -> Result<()> {
        selection.warn_unknown();

        if selection.targets.is_empty() {
            info!("No targets selected, skipping launch step");
        }

        for target in &selection.targets {
            self.launch(target)?;
        }

        info!(wait_ms = self.plan.startup_wait.as_millis() as u64, "Waiting for targets to settle");
        self.host.sleep(self.plan.startup_wait);

        let client_result = if self.run_client {
            self.run_client_step()
        } else {
            info!("Client step skipped");
            Ok(())
        };

        if self.run_cleanup {
            self.cleanup()?;
        } else {
            info!("Cleanup step skipped");
        }

        client_result
    }

    fn launch(&self, target: &Target) -> Result<()> {
        let cmd = LaunchCommand::new(
            resolve_program(&self.bin_dir, &target.program),
            target.args.clone(),
        );

        if target.daemon {
            let pid = self
                .host
                .spawn_daemon(&cmd)
                .map_err(host_err)?;
            info!(target = %target.name, pid, command = %cmd, "Daemon target started");
        } else {
            info!(target = %target.name, command = %cmd, "Running foreground target");
            let status = self.host.run_foreground(&cmd).map_err(host_err)?;
            if !status.is_success() {
                return Err(SmokerunError::TargetFailed {
                    target: target.name.as_str().to_owned(),
                    status: status.to_string(),
                });
            }
            info!(target = %target.name, "Foreground target finished");
        }

        Ok(())
    }

    fn run_client_step(&self) -> Result<()> {
        let cmd = LaunchCommand::new(
            resolve_program(&self.bin_dir, &self.plan.client.program),
            self.plan.client.args.clone(),
        );

        info!(command = %cmd, "Running client");
        let status = self.host.run_foreground(&cmd).map_err(host_err)?;
        if !status.is_success() {
            return Err(SmokerunError::ClientFailed(status.to_string()));
        }

        info!("Client finished");
        Ok(())
    }

    fn cleanup(&self) -> Result<()> {
        let cleanup = &self.plan.cleanup;
        let count = self
            .host
            .kill_matching(&cleanup.pattern, cleanup.grace)
            .map_err(host_err)?;

        if count == 0 {
            info!(pattern = %cleanup.pattern, "Cleanup found no matching processes");
        } else {
            info!(pattern = %cleanup.pattern, count, "Cleanup terminated matching processes");
        }

        Ok(())
    }
}

fn host_err(err: HostError) -> SmokerunError {
    SmokerunError::host(err.to_string())
}

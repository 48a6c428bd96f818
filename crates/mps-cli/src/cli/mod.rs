//! CLI for issuing power actions through the management proxy.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mps_core::config::{self, MpsConfig};
use mps_core::{ActionCode, AmtActionBody, PowerAction, StatusPolicy};
use std::path::PathBuf;

use commands::{run_action, run_power, run_show_config};

/// Top-level CLI for mpsctl.
#[derive(Debug, Parser)]
#[command(name = "mpsctl")]
#[command(about = "Send AMT power actions to devices through an MPS", long_about = None)]
pub struct Cli {
    /// Proxy host[:port], overriding `server_name_with_port` from the config file.
    #[arg(long, global = true, value_name = "HOST")]
    pub server: Option<String>,

    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat non-2xx proxy responses as success (they are still logged and printed).
    #[arg(long, global = true)]
    pub log_only: bool,

    /// Debug-level logging (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Power on a device.
    PowerOn {
        /// Device GUID as known to the proxy.
        guid: String,
    },

    /// Power off a device.
    PowerOff {
        /// Device GUID as known to the proxy.
        guid: String,
    },

    /// Reboot a device.
    Reboot {
        /// Device GUID as known to the proxy.
        guid: String,
    },

    /// Send a raw action code (2 = on, 8 = off, 10 = reboot) or action name.
    Action {
        /// Device GUID as known to the proxy.
        guid: String,
        /// Integer code, one of: on, off, reboot, or an AMT body like '{"Action":8}'.
        #[arg(value_parser = parse_action_code, allow_hyphen_values = true)]
        action: ActionCode,
    },

    /// Print the effective configuration and resolved proxy URL.
    ShowConfig,
}

/// Accepts an integer code, a power action name, or an `{"Action": n}` body.
fn parse_action_code(s: &str) -> Result<ActionCode, String> {
    let s = s.trim();
    if s.starts_with('{') {
        return serde_json::from_str::<AmtActionBody>(s)
            .map(ActionCode::from)
            .map_err(|e| format!("invalid AMT action body: {}", e));
    }
    if let Ok(n) = s.parse::<i32>() {
        return Ok(ActionCode(n));
    }
    s.parse::<PowerAction>()
        .map(ActionCode::from)
        .map_err(|e| e.to_string())
}

impl Cli {
    /// Config from `--config` or the XDG file, with command-line overrides applied.
    fn effective_config(&self) -> Result<MpsConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(server) = &self.server {
            cfg.server_name_with_port = server.clone();
        }
        if self.log_only {
            cfg.status_policy = Some(StatusPolicy::LogOnly);
        }
        Ok(cfg)
    }

    pub async fn run(self) -> Result<()> {
        let cfg = self.effective_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::PowerOn { guid } => run_power(&cfg, &guid, PowerAction::PowerOn).await,
            CliCommand::PowerOff { guid } => run_power(&cfg, &guid, PowerAction::PowerOff).await,
            CliCommand::Reboot { guid } => run_power(&cfg, &guid, PowerAction::Reboot).await,
            CliCommand::Action { guid, action } => run_action(&cfg, &guid, action).await,
            CliCommand::ShowConfig => run_show_config(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;

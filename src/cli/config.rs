use std::path::Path;

use hospital::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or initialise the hospital configuration
///
/// Configuration is stored as TOML (by default in `hospital.toml`).
///
/// Available configuration keys:
///   name                 Display name of the hospital
///   `allow_unregistered`   Accept appointments and prescriptions for people
///                        who are not registered (default: false)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    #[instrument]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => Self::show_config(config_path),
            ConfigCommand::Init { force } => Self::init_config(config_path, force),
        }
    }

    fn show_config(config_path: &Path) -> anyhow::Result<()> {
        let config = Config::load_or_default(config_path).map_err(|e| anyhow::anyhow!("{e}"))?;

        println!("Configuration:");
        println!("  name: {}", config.name());
        println!(
            "  allow_unregistered: {} ({})",
            config.allow_unregistered,
            if config.allow_unregistered {
                "references taken on trust".dim()
            } else {
                "references checked".dim()
            }
        );
        Ok(())
    }

    fn init_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
        if config_path.exists() && !force {
            anyhow::bail!(
                "Configuration file {} already exists (use --force to overwrite)",
                config_path.display()
            );
        }

        Config::default()
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        println!(
            "{}",
            format!("Wrote default configuration to {}", config_path.display()).success()
        );
        Ok(())
    }
}

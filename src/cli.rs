use std::path::{Path, PathBuf};

mod config;
mod demo;
mod terminal;

use clap::ArgAction;
use demo::Demo;
use hospital::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the hospital configuration file
    #[arg(short, long, default_value = "hospital.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Demo(Demo::default()))
            .run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the scenario output
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the demonstration scenario (default)
    Demo(Demo),

    /// Show or initialise configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Demo(command) => {
                let config = load_config(config_path)?;
                command.run(config)?;
            }
            Self::Config(command) => command.run(config_path)?,
        }
        Ok(())
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(path).map_err(|e| anyhow::anyhow!("{e}"))
}

//! Command-line driver for the hospital records library.
//!
//! Runs a fixed demonstration scenario against an in-memory [`hospital::Hospital`].

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}

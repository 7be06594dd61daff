pub mod check;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use dnscheck_common::config::{self, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dnscheck", version)]
#[command(about = "Checks which DNS servers can resolve which domains.")]
pub struct CommandLine {
    /// DNS server list file (IP per line, optional label after a space)
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Domain list file (domain per line, optional category after a space)
    #[arg(short, long, value_name = "FILE")]
    pub domains: Option<PathBuf>,

    /// Output file for results [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Timeout in seconds for DNS queries
    #[arg(
        short,
        long,
        value_name = "SEC",
        default_value_t = config::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Number of concurrent workers
    #[arg(short, long, value_name = "NUM", default_value_t = config::DEFAULT_WORKERS)]
    pub workers: NonZeroUsize,

    /// Less output: -q hides decorations, -qq also hides the progress bar
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            workers: self.workers,
            timeout: Duration::from_secs(self.timeout),
            quiet: self.quiet,
            ..Config::default()
        }
    }
}

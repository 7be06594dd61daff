mod commands;
mod input;
mod report;
mod terminal;

use commands::{CommandLine, check};
use dnscheck_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.config();
    print::banner(cfg.quiet);

    check::check(&commands, &cfg).await
}

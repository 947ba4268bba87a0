use anyhow::Result;
use clap::Parser;

use subword::cli::CliArgs;
use subword::config::SubwordConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config decides the default log filter, so it loads before tracing starts
    let config = SubwordConfig::load();
    subword::tracing::init(&config.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    args.run(&config, &mut out)
}

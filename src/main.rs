use clap::Parser;

use prisma_entities::cli::Args;
use prisma_entities::config::ConfigFile;
use prisma_entities::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ConfigFile::load(args.config.as_deref())?;

    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.log_level_or_default());
    logging::init_tracing(log_level);

    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}

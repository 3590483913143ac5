mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, list};
use terminal::logging;
use tracing::error;

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let result = match &commands.command {
        Commands::List(args) => list::list(args, commands.quiet).await,
        Commands::Info(args) => info::info(args, commands.quiet).await,
    };

    if let Err(err) = result {
        error!("{err:#}");
        std::process::exit(1);
    }
}

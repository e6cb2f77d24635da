mod cli;

use boardsel_lib::{Config, Result};
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    let config = Config::new(cli.tool.clone(), None)?;

    match cli.command {
        cli::Commands::List { json } => cli::list::handle_list_command(&config, json, cli.quiet),

        cli::Commands::Resolve { config: path, json } => {
            cli::resolve::handle_resolve_command(&config, path, json, cli.quiet)
        }

        cli::Commands::Parse { input, columns, json } => {
            cli::parse::handle_parse_command(&input, columns, json)
        }

        cli::Commands::Config => cli::settings::handle_config_command(&config),
    }
}

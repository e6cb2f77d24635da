pub mod list;
pub mod parse;
pub mod resolve;
pub mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boardsel")]
#[command(about = "Find connected boards and keep the saved board selection current", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Command line that lists connected boards")]
    pub tool: Option<String>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List connected boards")]
    List {
        #[arg(long, help = "Print boards as JSON")]
        json: bool,
    },

    #[command(about = "Resolve the board to use and update the saved selection")]
    Resolve {
        #[arg(help = "Path to the board selection file")]
        config: Option<PathBuf>,

        #[arg(long, help = "Print the resolution as JSON")]
        json: bool,
    },

    #[command(about = "Parse saved board list output")]
    Parse {
        #[arg(help = "File holding the tool output, or - for stdin")]
        input: PathBuf,

        #[arg(long, help = "Show detected header columns")]
        columns: bool,

        #[arg(long, help = "Print boards as JSON")]
        json: bool,
    },

    #[command(about = "Show effective configuration")]
    Config,
}

pub fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

mod commands;

use clap::{Parser, Subcommand};

use edgedock_core::Edge;

#[derive(Parser)]
#[command(name = "edgedock", version, about = "An edge-docking auto-hide panel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the panel in the foreground
    Run {
        /// Edge to dock to at startup (left, right, top, bottom)
        #[arg(long, value_parser = parse_edge)]
        edge: Option<Edge>,
    },
    /// Create the default configuration file
    Init {
        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Print cursor positions as the sampler sees them
    Pointer {
        /// Number of samples to print
        #[arg(long, default_value_t = 10)]
        samples: usize,
    },
}

fn parse_edge(name: &str) -> Result<Edge, String> {
    Edge::from_name(name).ok_or_else(|| format!("unknown edge '{name}'"))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { edge } => commands::run::execute(edge),
        Commands::Init { force } => commands::init::execute(force),
        Commands::Debug { command } => match command {
            DebugCommands::Pointer { samples } => commands::debug::pointer::execute(samples),
        },
    }
}

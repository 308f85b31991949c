use clap::{Parser, Subcommand};
use lux::console::commands::{CallableTrait, GuestChatCommand, MigrateCommand};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate,
    /// Chat with a running server as a guest
    GuestChat {
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        server: String,
        #[arg(long)]
        message: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    get_command(cli).call()
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        Commands::Migrate => Box::new(MigrateCommand::new()),
        Commands::GuestChat { server, message } => {
            Box::new(GuestChatCommand::new(server, message))
        }
    }
}

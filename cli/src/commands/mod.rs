mod filter;
mod normalize;

use crate::argparse::Commands;
pub use filter::{handle_filter_command, load_options};
pub use normalize::{handle_denormalize_command, handle_normalize_command, list_operators};

/// Runs `command` and returns the text to print
pub fn handle_command(command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Normalize(args) => handle_normalize_command(args),
        Commands::Denormalize(args) => handle_denormalize_command(args),
        Commands::Operators => Ok(list_operators()),
        Commands::Filter(args) => handle_filter_command(args),
    }
}

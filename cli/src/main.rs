use precise_int_cli::argparse::parse_args;
use precise_int_cli::{commands, utils};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let output = commands::handle_command(cli.command)?;
    println!("{}", output);
    Ok(())
}

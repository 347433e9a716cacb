use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "precise-int",
    about = "Filter scaled integer columns by decimal input",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a decimal value to its scaled integer, e.g. 12.34 -> 1234
    Normalize(NormalizeArgs),
    /// Convert a scaled integer back to decimal text, e.g. 1234 -> 12.34
    Denormalize(DenormalizeArgs),
    /// List supported operator type codes
    Operators,
    /// Build the filter clause and bound parameter for a value
    Filter(FilterArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Decimal value, e.g. 12.34 or -25.75
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Number of decimal places kept in the scaled integer
    #[arg(long, default_value_t = precise_int::DEFAULT_PRECISION)]
    pub precision: u32,
}

#[derive(Args)]
pub struct DenormalizeArgs {
    /// Scaled integer, e.g. 1234
    #[arg(allow_hyphen_values = true)]
    pub value: i64,

    /// Number of decimal places in the scaled integer
    #[arg(long, default_value_t = precise_int::DEFAULT_PRECISION)]
    pub precision: u32,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Filter name, used as parameter name prefix
    #[arg(long, default_value = "filter")]
    pub name: String,

    /// Entity alias the column belongs to
    #[arg(long, default_value = "e")]
    pub alias: String,

    /// Column storing the scaled integer
    #[arg(long)]
    pub field: String,

    /// Operator type code, see the `operators` subcommand
    #[arg(long = "type", conflicts_with = "operator", allow_hyphen_values = true)]
    pub operator_type: Option<i64>,

    /// Operator name, e.g. greater_equal
    #[arg(long)]
    pub operator: Option<String>,

    /// JSON file with filter options (label, condition, precision)
    #[arg(long)]
    pub options: Option<String>,

    /// Submitted value; the filter is not applied when missing or not numeric
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

use crate::argparse::{DenormalizeArgs, NormalizeArgs};
use anyhow::Context;
use precise_int::{denormalize, normalize_with_precision, NumericValue, CHOICES};

pub fn handle_normalize_command(args: NormalizeArgs) -> anyhow::Result<String> {
    let value = NumericValue::from(args.value.as_str());
    let scaled = normalize_with_precision(&value, args.precision)
        .with_context(|| format!("Failed to normalize {:?}", args.value))?;
    Ok(scaled.to_string())
}

pub fn handle_denormalize_command(args: DenormalizeArgs) -> anyhow::Result<String> {
    Ok(denormalize(args.value, args.precision)?)
}

pub fn list_operators() -> String {
    CHOICES
        .iter()
        .map(|(op, symbol)| format!("{}\t{}\t{}", op.code(), op.name(), symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

use crate::argparse::FilterArgs;
use anyhow::{anyhow, Context};
use precise_int::{
    denormalize, FilterData, FilterOptions, NumericValue, OperatorCode, PreciseIntFilter,
    WhereClauseBuilder,
};
use std::str::FromStr;

pub fn load_options(path: &str) -> anyhow::Result<FilterOptions> {
    let json = fs_err::read_to_string(path)?;
    FilterOptions::from_json(&json).with_context(|| format!("Failed to load options from {}", path))
}

pub fn handle_filter_command(args: FilterArgs) -> anyhow::Result<String> {
    let options = match &args.options {
        Some(path) => load_options(path)?,
        None => FilterOptions::default(),
    };
    let precision = options.precision;

    let operator_type = match (&args.operator_type, &args.operator) {
        (Some(code), _) => Some(*code),
        (None, Some(name)) => Some(
            OperatorCode::from_str(name)
                .map_err(|_| anyhow!("Unknown operator name: {}", name))?
                .code(),
        ),
        (None, None) => None,
    };
    let data = FilterData::new(args.value.map(NumericValue::from), operator_type);

    let filter = PreciseIntFilter::new(args.name, options);
    let mut query = WhereClauseBuilder::new();
    if !filter.apply(&mut query, &args.alias, &args.field, &data)? {
        tracing::info!(filter = filter.name(), "Filter not applied");
        return Ok("Filter not applied: no numeric value given".to_string());
    }

    let mut lines = vec![query.to_sql()];
    for (name, value) in query.parameters() {
        lines.push(format!(
            "{} = {} ({})",
            name,
            value,
            denormalize(*value, precision)?
        ));
    }
    Ok(lines.join("\n"))
}

use anyhow::{Context, Result};
use checkdigit_core::verhoeff;

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::cli::report::GenerateReport;
use crate::exit_codes;

pub fn run(args: GenerateArgs) -> Result<i32> {
    tracing::debug!(len = args.partial.len(), "generate");

    // A malformed partial is a usage error; bubbling it up lands on
    // USAGE_ERROR in main.
    let digit = verhoeff::check_digit(&args.partial)
        .with_context(|| format!("cannot compute a check digit for {:?}", args.partial))?;
    let full = format!("{}{}", args.partial, digit);

    match args.format {
        OutputFormat::Json => {
            let report = GenerateReport {
                partial: &args.partial,
                check_digit: digit,
                full,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => println!("{full}"),
    }

    Ok(exit_codes::OK)
}

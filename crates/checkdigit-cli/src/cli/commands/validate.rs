use anyhow::Result;
use checkdigit_core::{aadhaar, verhoeff};

use crate::cli::args::{OutputFormat, Scheme, ValidateArgs};
use crate::cli::report::ValidateReport;
use crate::exit_codes;

pub fn run(args: ValidateArgs) -> Result<i32> {
    tracing::debug!(scheme = args.scheme.as_str(), len = args.value.len(), "validate");

    let (valid, reason) = match args.scheme {
        Scheme::Aadhaar => match aadhaar::validate(&args.value) {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        },
        Scheme::Verhoeff => match verhoeff::validate(&args.value) {
            Ok(true) => (true, None),
            Ok(false) => (false, Some("checksum mismatch".to_string())),
            Err(e) => (false, Some(e.to_string())),
        },
    };

    match args.format {
        OutputFormat::Json => {
            let report = ValidateReport {
                input: &args.value,
                scheme: args.scheme.as_str(),
                valid,
                reason,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if valid {
                eprintln!("✔ Valid: {}", args.value);
            } else {
                eprintln!(
                    "✘ Invalid: {} ({})",
                    args.value,
                    reason.as_deref().unwrap_or("checksum mismatch")
                );
            }
        }
    }

    Ok(if valid { exit_codes::OK } else { exit_codes::INVALID })
}

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "checkdigit",
    version,
    about = "Verhoeff check-digit validation and generation for decimal identifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a checksummed number
    Validate(ValidateArgs),
    /// Append a check digit to a partial number
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Candidate identifier (digits only)
    pub value: String,

    /// Validation scheme to apply
    #[arg(long, value_enum, default_value_t = Scheme::Aadhaar)]
    pub scheme: Scheme,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Partial identifier missing its final check digit
    pub partial: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// 12-digit Aadhaar identifier: format gate plus checksum
    Aadhaar,
    /// Length-agnostic Verhoeff checksum
    Verhoeff,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Aadhaar => "aadhaar",
            Scheme::Verhoeff => "verhoeff",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

//! Machine-readable report shapes for `--format json`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidateReport<'a> {
    pub input: &'a str,
    pub scheme: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport<'a> {
    pub partial: &'a str,
    pub check_digit: u8,
    pub full: String,
}

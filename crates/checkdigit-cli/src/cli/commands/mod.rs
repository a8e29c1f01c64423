pub mod generate;
pub mod validate;

use anyhow::Result;

use crate::cli::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Validate(args) => validate::run(args),
        Command::Generate(args) => generate::run(args),
    }
}

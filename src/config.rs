use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::summer::Summer;
use crate::units::{Base, UnitMap};

/// Sum the numbers read from standard input, one per line.
#[derive(Debug, Parser)]
#[command(name = "pipesum", version, disable_help_flag = true)]
pub struct Args {
    /// Numeric (default)
    #[arg(short = 'n', long)]
    numeric: bool,

    /// Human readable (prefixes like M, K, etc)
    #[arg(short = 'h', long)]
    human_readable: bool,

    /// Use IEC prefixes for human-readable (Mi, Ki, etc)
    #[arg(long)]
    human_iec: bool,

    /// Specify a unit to follow the prefix
    #[arg(long, value_name = "UNIT", default_value = "")]
    human_unit: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("exactly one format must be selected")]
    ConflictingFormats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Numeric,
    Human { base: Base, unit: String },
}

/// Validated run configuration, fixed for the whole process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: Format,
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let format = match (self.numeric, self.human_readable) {
            (true, true) => return Err(ConfigError::ConflictingFormats),
            (_, true) => Format::Human {
                base: if self.human_iec {
                    Base::Binary
                } else {
                    Base::Decimal
                },
                unit: self.human_unit,
            },
            (_, false) => Format::Numeric,
        };
        Ok(Config { format })
    }
}

impl Config {
    pub fn summer(&self) -> Summer {
        match &self.format {
            Format::Numeric => Summer::Numeric,
            Format::Human { base, unit } => Summer::Human(UnitMap::new(*base, unit)),
        }
    }
}

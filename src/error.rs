use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

/// Why a single input token could not be turned into a value.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Number(#[from] ParseFloatError),
    #[error("value out of range")]
    OutOfRange,
    #[error("invalid quantity")]
    InvalidQuantity,
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("overflow parsing unit")]
    Overflow,
}

/// Fatal errors of a summing run. Each one ends the process with status 1.
#[derive(Debug, Error)]
pub enum SumError {
    #[error("stream read error: {0}")]
    Read(#[source] io::Error),
    #[error("could not parse {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseError,
    },
    #[error("could not write result: {0}")]
    Write(#[source] io::Error),
}

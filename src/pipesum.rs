use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::SumError;
use crate::summer::Summer;

/// Sums every line of `input`, stopping at the first line that cannot be
/// read or parsed.
pub fn pipesum<R: BufRead>(input: R, summer: &Summer) -> Result<f64, SumError> {
    let mut total = 0.0;
    let mut count = 0usize;
    for line in input.lines() {
        let line = line.map_err(SumError::Read)?;
        let value = summer.parse(&line).map_err(|source| SumError::Parse {
            token: line.clone(),
            source,
        })?;
        trace!(line = count + 1, value, "parsed");
        total += value;
        count += 1;
    }
    debug!(lines = count, total, "input exhausted");
    Ok(total)
}

/// Sums `input` and writes the formatted total, newline-terminated, to
/// `output`. Nothing is written when summing fails.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    summer: &Summer,
) -> Result<(), SumError> {
    let total = pipesum(input, summer)?;
    writeln!(output, "{}", summer.format(total))
        .and_then(|_| output.flush())
        .map_err(SumError::Write)
}

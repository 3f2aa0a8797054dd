use crate::error::ParseError;
use crate::units::UnitMap;

/// How input tokens are read and how the total is printed.
#[derive(Debug, Clone)]
pub enum Summer {
    /// Plain floating point numbers.
    Numeric,
    /// Numbers with a magnitude prefix and optional unit, e.g. `1.5KiB`.
    Human(UnitMap),
}

impl Summer {
    pub fn parse(&self, token: &str) -> Result<f64, ParseError> {
        match self {
            Summer::Numeric => {
                let value: f64 = token.parse()?;
                if value.is_infinite() && !is_infinity_literal(token) {
                    return Err(ParseError::OutOfRange);
                }
                Ok(value)
            }
            Summer::Human(units) => units.parse_quantity(token),
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            Summer::Numeric => format_general(value),
            Summer::Human(units) if !value.is_finite() => {
                format!("{}{}", format_general(value), units.unit())
            }
            Summer::Human(units) => {
                // Below the smallest multiplier (zero, negatives, fractions)
                // the value is printed as is, followed by the bare unit.
                let (symbol, multiplier) = units.nearest(value).unwrap_or((units.unit(), 1.0));
                format!("{:.1}{}", value / multiplier, symbol)
            }
        }
    }
}

fn is_infinity_literal(token: &str) -> bool {
    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

/// Shortest representation that parses back to `n`, switching to
/// exponent notation outside `1e-4 <= |n| < 1e6`.
fn format_general(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if n == 0.0 {
        return n.to_string();
    }

    let sci = format!("{:e}", n);
    let parts = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exp)) if !(-4..6).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => n.to_string(),
    }
}

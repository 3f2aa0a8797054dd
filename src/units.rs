use std::collections::HashMap;

use crate::error::ParseError;

const PREFIXES: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Magnitude convention for prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Powers of 1000: K, M, G, ...
    Decimal,
    /// Powers of 1024: Ki, Mi, Gi, ...
    Binary,
}

impl Base {
    pub fn radix(self) -> f64 {
        match self {
            Base::Decimal => 1000.0,
            Base::Binary => 1024.0,
        }
    }

    fn infix(self) -> &'static str {
        match self {
            Base::Decimal => "",
            Base::Binary => "i",
        }
    }
}

/// Prefix symbol to multiplier table, with an optional base unit appended
/// to every symbol.
#[derive(Debug, Clone)]
pub struct UnitMap {
    multipliers: HashMap<String, f64>,
    // ascending, aliases excluded
    ladder: Vec<(String, f64)>,
    unit: String,
}

impl UnitMap {
    pub fn new(base: Base, unit: &str) -> UnitMap {
        let mut ladder = vec![(unit.to_string(), 1.0)];
        let mut multiplier = 1.0;
        for prefix in PREFIXES.iter() {
            multiplier *= base.radix();
            ladder.push((format!("{}{}{}", prefix, base.infix(), unit), multiplier));
        }

        let mut multipliers: HashMap<String, f64> = ladder.iter().cloned().collect();
        // SI kilo is lowercase; accept it too, but never for 1024.
        if base == Base::Decimal {
            multipliers.insert(format!("k{}", unit), base.radix());
        }

        UnitMap {
            multipliers,
            ladder,
            unit: unit.to_string(),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.multipliers.get(symbol).copied()
    }

    /// The base unit every symbol ends with (may be empty).
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Canonical symbols in ascending order of magnitude.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, f64)> {
        self.ladder.iter().map(|(s, m)| (s.as_str(), *m))
    }

    /// Largest canonical symbol whose multiplier does not exceed `value`.
    pub fn nearest(&self, value: f64) -> Option<(&str, f64)> {
        self.iter().rev().find(|&(_, m)| m <= value)
    }

    /// Parses `[+-]?(<number><symbol>)+`, e.g. `1.5K`, `-2MiB`, `1Mi512Ki`.
    pub fn parse_quantity(&self, token: &str) -> Result<f64, ParseError> {
        let (negative, mut rest) = match token.as_bytes().first() {
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            _ => (false, token),
        };
        if rest == "0" {
            return Ok(0.0);
        }
        if rest.is_empty() {
            return Err(ParseError::InvalidQuantity);
        }

        let mut total = 0.0;
        while !rest.is_empty() {
            let bytes = rest.as_bytes();
            let mut i = 0;
            let mut digits = 0;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
                digits += 1;
            }
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                    digits += 1;
                }
            }
            if digits == 0 {
                return Err(ParseError::InvalidQuantity);
            }
            let number: f64 = rest[..i]
                .parse()
                .map_err(|_| ParseError::InvalidQuantity)?;

            let end = rest[i..]
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .map_or(rest.len(), |j| i + j);
            let symbol = &rest[i..end];
            let multiplier = self
                .get(symbol)
                .ok_or_else(|| ParseError::UnknownUnit(symbol.to_string()))?;

            total += number * multiplier;
            rest = &rest[end..];
        }

        let total = if negative { -total } else { total };
        // same range as a signed 64-bit count
        if total.abs() > i64::MAX as f64 {
            return Err(ParseError::Overflow);
        }
        Ok(total)
    }
}

//! Tokenizer and unit resolution for the parsing entry points.
//!
//! The recognized unit spellings live in three ordered 13-tier tables (base
//! unit plus six SI and six binary tiers), one per domain. Tables and token
//! patterns are process-wide state compiled once on first use and never
//! mutated afterwards, so concurrent readers need no synchronization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::prefix::{EXA, EXBI, GIBI, GIGA, KIBI, KILO, MEBI, MEGA, PEBI, PETA, TEBI, TERA};

/// How SI-spelled prefixes scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrefixBase {
    /// `k`, `M`, … multiply by powers of 1000.
    Decimal,
    /// `k`, `M`, … multiply by powers of 1024.
    Binary,
}

/// Token discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Spacing {
    /// Numeral and unit in one unbroken token; a bare numeral is a count of
    /// base units.
    Strict,
    /// One space permitted between numeral and unit; a unit is mandatory.
    Lenient,
}

/// One recognized unit spelling with its scale in both interpretations.
struct UnitEntry {
    pattern: Regex,
    decimal: u64,
    binary: u64,
}

impl UnitEntry {
    fn scale(&self, base: PrefixBase) -> u64 {
        match base {
            PrefixBase::Decimal => self.decimal,
            PrefixBase::Binary => self.binary,
        }
    }
}

fn entry(pattern: &str, decimal: u64, binary: u64) -> UnitEntry {
    UnitEntry {
        pattern: Regex::new(&format!("(?i)^{pattern}$")).unwrap(),
        decimal,
        binary,
    }
}

static BIT_UNITS: Lazy<Vec<UnitEntry>> = Lazy::new(|| {
    vec![
        entry("bits?", 1, 1),
        entry("k(ilo)?bits?", KILO, KIBI),
        entry("m(ega)?bits?", MEGA, MEBI),
        entry("g(iga)?bits?", GIGA, GIBI),
        entry("t(era)?bits?", TERA, TEBI),
        entry("p(eta)?bits?", PETA, PEBI),
        entry("e(xa)?bits?", EXA, EXBI),
        entry("(ki|kibi)bits?", KIBI, KIBI),
        entry("(mi|mebi)bits?", MEBI, MEBI),
        entry("(gi|gibi)bits?", GIBI, GIBI),
        entry("(ti|tebi)bits?", TEBI, TEBI),
        entry("(pi|pebi)bits?", PEBI, PEBI),
        entry("(ei|exbi)bits?", EXBI, EXBI),
    ]
});

// The alternations are intentionally not grouped: `^kb|kilobytes?$` also
// stem-matches spellings like "kbyte" or "tibibyte", keeping the grammar as
// tolerant as it has historically been.
static BYTE_UNITS: Lazy<Vec<UnitEntry>> = Lazy::new(|| {
    vec![
        entry("b(ytes?)?", 1, 1),
        entry("kb|kilobytes?", KILO, KIBI),
        entry("mb|megabytes?", MEGA, MEBI),
        entry("gb|gigabytes?", GIGA, GIBI),
        entry("tb|terabytes?", TERA, TEBI),
        entry("pb|petabytes?", PETA, PEBI),
        entry("eb|exabytes?", EXA, EXBI),
        entry("kib|kibibytes?", KIBI, KIBI),
        entry("mib|mebibytes?", MEBI, MEBI),
        entry("gib|gibibytes?", GIBI, GIBI),
        entry("tib|tebibytes?", TEBI, TEBI),
        entry("pib|pebibytes?", PEBI, PEBI),
        entry("eib|exbibytes?", EXBI, EXBI),
    ]
});

/// One recognized rate suffix with its scale in both interpretations.
struct RateEntry {
    pattern: Regex,
    decimal: f64,
    binary: f64,
}

impl RateEntry {
    fn scale(&self, base: PrefixBase) -> f64 {
        match base {
            PrefixBase::Decimal => self.decimal,
            PrefixBase::Binary => self.binary,
        }
    }
}

fn rate_entry(pattern: &str, decimal: u64, binary: u64) -> RateEntry {
    RateEntry {
        pattern: Regex::new(&format!("(?i)^{pattern}$")).unwrap(),
        decimal: decimal as f64,
        binary: binary as f64,
    }
}

/// Compact rate suffixes: "bit/s" and "bps" spellings.
static RATE_UNITS: Lazy<Vec<RateEntry>> = Lazy::new(|| {
    let st = "(bps|bit/s)";
    vec![
        rate_entry(st, 1, 1),
        rate_entry(&format!("k{st}"), KILO, KIBI),
        rate_entry(&format!("m{st}"), MEGA, MEBI),
        rate_entry(&format!("g{st}"), GIGA, GIBI),
        rate_entry(&format!("t{st}"), TERA, TEBI),
        rate_entry(&format!("p{st}"), PETA, PEBI),
        rate_entry(&format!("e{st}"), EXA, EXBI),
        rate_entry(&format!("ki{st}"), KIBI, KIBI),
        rate_entry(&format!("mi{st}"), MEBI, MEBI),
        rate_entry(&format!("gi{st}"), GIBI, GIBI),
        rate_entry(&format!("ti{st}"), TEBI, TEBI),
        rate_entry(&format!("pi{st}"), PEBI, PEBI),
        rate_entry(&format!("ei{st}"), EXBI, EXBI),
    ]
});

/// Spelled-out rate suffixes, combined with "per sec[ond]" continuation
/// tokens, e.g. "kilobits per second".
static RATE_LONG_UNITS: Lazy<Vec<RateEntry>> = Lazy::new(|| {
    vec![
        rate_entry("bits?", 1, 1),
        rate_entry("k(ilo)?bits?", KILO, KIBI),
        rate_entry("m(ega)?bits?", MEGA, MEBI),
        rate_entry("g(iga)?bits?", GIGA, GIBI),
        rate_entry("t(era)?bits?", TERA, TEBI),
        rate_entry("p(eta)?bits?", PETA, PEBI),
        rate_entry("e(xa)?bits?", EXA, EXBI),
        rate_entry("(ki|kibi)bits?", KIBI, KIBI),
        rate_entry("(mi|mebi)bits?", MEBI, MEBI),
        rate_entry("(gi|gibi)bits?", GIBI, GIBI),
        rate_entry("(ti|tebi)bits?", TEBI, TEBI),
        rate_entry("(pi|pebi)bits?", PEBI, PEBI),
        rate_entry("(ei|exbi)bits?", EXBI, EXBI),
    ]
});

// First token: numeral with an optional attached unit. Group 1 is the
// numeral, group 2 the integer digits, group 3 the fraction, group 4 the
// unit.
static COUNT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(([0-9]*)(\.[0-9]+)?)([a-z]*)$").unwrap());
static COUNT_UNIT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([a-z]*)$").unwrap());

// Rates additionally accept "nan", signed infinities, signed numerals, and
// "/" within the unit.
static RATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(nan|[+-]inf|[+-]?([0-9]*)(\.[0-9]+)?)([a-z/]*)$").unwrap());
static RATE_UNIT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([a-z/]+)$").unwrap());

static RE_PER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^per$").unwrap());
static RE_SECOND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^sec(ond)?$").unwrap());

/// Splits off the leading whitespace-delimited token.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], &s[at..]),
        None => (s, ""),
    }
}

/// Consumes exactly one space, rejecting anything else in its place.
fn expect_single_space(rest: &str) -> Result<&str, ParseError> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(' ') => {}
        _ => return Err(ParseError::MissingUnit),
    }
    let rest = chars.as_str();
    if rest.starts_with(char::is_whitespace) {
        return Err(ParseError::DoubledSpace);
    }
    Ok(rest)
}

/// Rejects leftover input once a value has been fully parsed.
fn expect_end(rest: &str) -> Result<(), ParseError> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TrailingInput { rest: rest.into() })
    }
}

/// Multiplies an integral literal by a tier scale, exactly.
fn scale_int(literal: &str, scale: u64) -> Result<u64, ParseError> {
    // The literal is all digits at this point, so the only possible parse
    // failure is overflow.
    let value: u64 = literal.parse().map_err(|_| ParseError::OutOfRange)?;
    value.checked_mul(scale).ok_or(ParseError::OutOfRange)
}

/// Multiplies a fractional literal by a tier scale, rounding half away from
/// zero.
fn scale_float(literal: &str, scale: u64) -> Result<u64, ParseError> {
    let value: f64 = literal.parse().map_err(|_| ParseError::InvalidNumber {
        token: literal.into(),
    })?;
    let product = (value * scale as f64).round();
    // `u64::MAX as f64` rounds up to 2^64 and must itself be rejected.
    if !(product >= 0.0 && product < u64::MAX as f64) {
        return Err(ParseError::OutOfRange);
    }
    Ok(product as u64)
}

fn parse_count(
    input: &str,
    units: &[UnitEntry],
    base: PrefixBase,
    spacing: Spacing,
) -> Result<u64, ParseError> {
    let s = input.trim_start();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let (token, mut rest) = split_token(s);
    let caps = COUNT_TOKEN
        .captures(token)
        .ok_or_else(|| ParseError::InvalidNumber {
            token: token.into(),
        })?;
    let numeral = caps.get(1).map_or("", |m| m.as_str());
    if numeral.is_empty() {
        return Err(ParseError::InvalidNumber {
            token: token.into(),
        });
    }
    let is_int = caps.get(2).is_some_and(|m| !m.as_str().is_empty()) && caps.get(3).is_none();
    let mut unit = caps.get(4).map_or("", |m| m.as_str());

    if unit.is_empty() {
        match spacing {
            Spacing::Strict => {
                // A bare numeral is a count of base units.
                expect_end(rest)?;
                if !is_int {
                    return Err(ParseError::NonIntegerCount {
                        literal: numeral.into(),
                    });
                }
                return scale_int(numeral, 1);
            }
            Spacing::Lenient => {
                rest = expect_single_space(rest)?;
                let token2;
                (token2, rest) = split_token(rest);
                let caps2 =
                    COUNT_UNIT_TOKEN
                        .captures(token2)
                        .ok_or_else(|| ParseError::UnknownUnit {
                            unit: token2.into(),
                        })?;
                unit = caps2.get(1).map_or("", |m| m.as_str());
                if unit.is_empty() {
                    return Err(ParseError::MissingUnit);
                }
            }
        }
    }
    expect_end(rest)?;

    // The base unit admits only integral literals.
    if units[0].pattern.is_match(unit) {
        if !is_int {
            return Err(ParseError::NonIntegerCount {
                literal: numeral.into(),
            });
        }
        return scale_int(numeral, 1);
    }
    for ent in &units[1..] {
        if ent.pattern.is_match(unit) {
            return if is_int {
                scale_int(numeral, ent.scale(base))
            } else {
                scale_float(numeral, ent.scale(base))
            };
        }
    }
    Err(ParseError::UnknownUnit { unit: unit.into() })
}

/// Parses a bit count expression, returning the raw number of bits.
pub(crate) fn parse_bits(
    input: &str,
    base: PrefixBase,
    spacing: Spacing,
) -> Result<u64, ParseError> {
    parse_count(input, &BIT_UNITS, base, spacing)
}

/// Parses a byte count expression, returning the raw number of bytes.
pub(crate) fn parse_bytes(
    input: &str,
    base: PrefixBase,
    spacing: Spacing,
) -> Result<u64, ParseError> {
    parse_count(input, &BYTE_UNITS, base, spacing)
}

/// Parses a bit rate expression, returning the raw number of bits per second.
pub(crate) fn parse_rate(
    input: &str,
    base: PrefixBase,
    spacing: Spacing,
) -> Result<f64, ParseError> {
    let s = input.trim_start();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let (token, mut rest) = split_token(s);
    let caps = RATE_TOKEN
        .captures(token)
        .ok_or_else(|| ParseError::InvalidNumber {
            token: token.into(),
        })?;
    let numeral = caps.get(1).map_or("", |m| m.as_str());
    if numeral.is_empty() {
        return Err(ParseError::InvalidNumber {
            token: token.into(),
        });
    }
    let mut unit = caps.get(4).map_or("", |m| m.as_str());

    if unit.is_empty() {
        match spacing {
            Spacing::Strict => {
                // A bare numeral is a number of bits per second.
                expect_end(rest)?;
                return parse_rate_literal(numeral);
            }
            Spacing::Lenient => {
                rest = expect_single_space(rest)?;
                let token2;
                (token2, rest) = split_token(rest);
                if token2.is_empty() {
                    return Err(ParseError::MissingUnit);
                }
                let caps2 =
                    RATE_UNIT_TOKEN
                        .captures(token2)
                        .ok_or_else(|| ParseError::UnknownUnit {
                            unit: token2.into(),
                        })?;
                unit = caps2.get(1).map_or("", |m| m.as_str());
            }
        }
    }

    let literal = parse_rate_literal(numeral)?;
    for ent in RATE_UNITS.iter() {
        if ent.pattern.is_match(unit) {
            expect_end(rest)?;
            return Ok(literal * ent.scale(base));
        }
    }

    // The compact suffix did not match; try the spelled-out three-token
    // form, e.g. "kilobits per second".
    let mut suffix = unit.to_owned();
    for expected in [&RE_PER, &RE_SECOND] {
        let Ok(after_space) = expect_single_space(rest) else {
            return Err(ParseError::UnknownUnit { unit: suffix });
        };
        let (word, next) = split_token(after_space);
        if word.is_empty() {
            return Err(ParseError::UnknownUnit { unit: suffix });
        }
        if !expected.is_match(word) {
            return Err(ParseError::MalformedRateSuffix {
                suffix: format!("{suffix} {word}"),
            });
        }
        suffix.push(' ');
        suffix.push_str(word);
        rest = next;
    }
    for ent in RATE_LONG_UNITS.iter() {
        if ent.pattern.is_match(unit) {
            expect_end(rest)?;
            return Ok(literal * ent.scale(base));
        }
    }
    Err(ParseError::UnknownUnit { unit: suffix })
}

fn parse_rate_literal(numeral: &str) -> Result<f64, ParseError> {
    numeral.parse().map_err(|_| ParseError::InvalidNumber {
        token: numeral.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token() {
        assert_eq!(split_token("12kB rest"), ("12kB", " rest"));
        assert_eq!(split_token("12kB"), ("12kB", ""));
        assert_eq!(split_token(""), ("", ""));
    }

    #[test]
    fn test_single_space_discipline() {
        assert_eq!(expect_single_space(" kB"), Ok("kB"));
        assert_eq!(expect_single_space(""), Err(ParseError::MissingUnit));
        assert_eq!(expect_single_space("  kB"), Err(ParseError::DoubledSpace));
        assert_eq!(expect_single_space("\tkB"), Err(ParseError::MissingUnit));
    }

    #[test]
    fn test_unit_tables_cover_all_tiers() {
        assert_eq!(BIT_UNITS.len(), 13);
        assert_eq!(BYTE_UNITS.len(), 13);
        assert_eq!(RATE_UNITS.len(), 13);
        assert_eq!(RATE_LONG_UNITS.len(), 13);
    }

    #[test]
    fn test_byte_unit_stem_tolerance() {
        // The historical alternation precedence accepts stem spellings.
        assert_eq!(
            parse_bytes("562 tibibyte", PrefixBase::Decimal, Spacing::Lenient),
            Ok(562 * TEBI)
        );
    }

    #[test]
    fn test_scale_float_rounds_half_away() {
        assert_eq!(scale_float("0.0005", KILO), Ok(1));
        assert_eq!(scale_float("0.00001", KILO), Ok(0));
        assert_eq!(scale_float(".75", KILO), Ok(750));
    }

    #[test]
    fn test_scale_overflow() {
        assert_eq!(scale_int("100", EXA), Err(ParseError::OutOfRange));
        assert_eq!(
            scale_int("18446744073709551616", 1),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(scale_float("100.5", EXA), Err(ParseError::OutOfRange));
    }
}

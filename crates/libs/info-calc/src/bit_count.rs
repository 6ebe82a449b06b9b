//! Non-negative counts of bits.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::bit_rate::BitRate;
use crate::byte_count::ByteCount;
use crate::errors::{ParseError, TransferTimeError};
use crate::macros::impl_count_ops;
use crate::prefix::{
    self, Style, EXA, EXBI, GIBI, GIGA, KIBI, KILO, MEBI, MEGA, PEBI, PETA, TEBI, TERA,
};
use crate::scan::{self, PrefixBase, Spacing};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Represents a non-negative number of bits.
///
/// Range: 0 bits through 18446744073709551615 bits (= 2 EiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BitCount {
    /// Raw number of bits.
    pub raw: u64,
}

impl BitCount {
    /// Construct [`BitCount`] from the provided raw number of bits.
    pub const fn new(raw: u64) -> Self {
        Self { raw }
    }

    /// Construct [`BitCount`] from the given number `n` of bits.
    pub const fn bits(n: u64) -> Self {
        Self::new(n)
    }

    /// Whether the count is zero.
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Convert the count to whole bytes and remaining bits.
    ///
    /// The remainder is always in `0..8`; `bytes * 8 + bits` reassembles the
    /// original count exactly.
    ///
    /// ```rust
    /// # use info_calc::{BitCount, ByteCount};
    /// assert_eq!(BitCount::new(15).to_byte_count(), (ByteCount::new(1), BitCount::new(7)));
    /// ```
    pub const fn to_byte_count(self) -> (ByteCount, BitCount) {
        (ByteCount::new(self.raw >> 3), BitCount::new(self.raw & 0b111))
    }

    /// Convert the count to a float value in the given unit.
    pub fn convert(self, unit: BitCount) -> f64 {
        self.raw as f64 / unit.raw as f64
    }

    /// Convert the count to a float value in the given unit, rounded half
    /// away from zero at the given number of fractional digits.
    pub fn convert_round(self, unit: BitCount, precision: u32) -> f64 {
        let p = 10f64.powi(precision as i32);
        (self.raw as f64 * p / unit.raw as f64).round() / p
    }

    /// Calculate the time it takes to transfer the bits at the given rate.
    pub fn time_to_transfer(self, rate: BitRate) -> Result<TimeDelta, TransferTimeError> {
        if rate.raw == 0.0 {
            return Err(TransferTimeError::DivZeroRate);
        }
        let nanos = self.raw as f64 * NANOS_PER_SEC / rate.raw;
        if nanos.is_nan() || nanos < i64::MIN as f64 || nanos >= i64::MAX as f64 {
            return Err(TransferTimeError::OutOfRange);
        }
        Ok(TimeDelta::nanoseconds(nanos as i64))
    }

    /// Calculate the rate at which the bits were transferred within the
    /// given time.
    ///
    /// A zero duration yields zero for a zero count and positive infinity
    /// otherwise.
    pub fn rate_given(self, elapsed: TimeDelta) -> BitRate {
        if elapsed.is_zero() {
            if self.raw == 0 {
                return BitRate::new(0.0);
            }
            return BitRate::new(f64::INFINITY);
        }
        BitRate::new(self.raw as f64 / elapsed.as_seconds_f64())
    }

    /// Big-endian fixed-width encoding of the count.
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.raw.to_be_bytes()
    }

    /// Decode a count from its big-endian fixed-width encoding.
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::new(u64::from_be_bytes(bytes))
    }

    /// Canonical textual form, e.g. `"1111 bit"`.
    ///
    /// The result parses back via [`BitCount::parse`].
    pub fn to_text(self) -> String {
        format!("{} bit", self.raw)
    }

    /// Parse a human-readable bit count.
    ///
    /// A unit suffix is mandatory and may be separated from the numeral by a
    /// single space. SI and binary prefixes are both recognized, in
    /// abbreviated and spelled-out forms, case-insensitively.
    ///
    /// ```rust
    /// # use info_calc::BitCount;
    /// assert_eq!(BitCount::parse("1.23Mbit").unwrap(), BitCount::new(1_230_000));
    /// assert_eq!(BitCount::parse("234.5 kibibits").unwrap(), BitCount::new(240_128));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        scan::parse_bits(input, PrefixBase::Decimal, Spacing::Lenient).map(Self::new)
    }

    /// Same as [`BitCount::parse`], except that SI prefixes scale by powers
    /// of 1024, so `"100 kbit"` parses as 102400 bits.
    pub fn parse_binary(input: &str) -> Result<Self, ParseError> {
        scan::parse_bits(input, PrefixBase::Binary, Spacing::Lenient).map(Self::new)
    }

    /// Parse a bit count given as a single unbroken token.
    ///
    /// A bare numeral is taken as a number of bits.
    pub fn parse_strict(input: &str) -> Result<Self, ParseError> {
        scan::parse_bits(input, PrefixBase::Decimal, Spacing::Strict).map(Self::new)
    }

    /// Same as [`BitCount::parse_strict`] with SI prefixes scaling by powers
    /// of 1024.
    pub fn parse_strict_binary(input: &str) -> Result<Self, ParseError> {
        scan::parse_bits(input, PrefixBase::Binary, Spacing::Strict).map(Self::new)
    }

    /// Returns an object that formats the count with a configurable unit
    /// style.
    ///
    /// The default renders SI-prefixed abbreviations without a space and
    /// with as many fractional digits as needed; the formatter's precision
    /// overrides the latter.
    ///
    /// ```rust
    /// # use info_calc::BitCount;
    /// let count = BitCount::new(123_456_789);
    /// assert_eq!(count.display().to_string(), "123.456789Mbit");
    /// assert_eq!(format!("{:.1}", count.display().binary().spaced()), "117.7 Mibit");
    /// ```
    pub const fn display(self) -> BitCountDisplay {
        BitCountDisplay {
            value: self,
            style: Style::plain(),
        }
    }
}

macro_rules! bit_count_ctors {
    ($($func:ident, $unit:literal, $factor:expr;)*) => {
        impl BitCount {
            $(
                #[doc = concat!("Construct [`BitCount`] from the given number `n` of ", $unit, "s.")]
                pub const fn $func(n: u64) -> Self {
                    Self::new(n * $factor)
                }
            )*
        }
    };
}

bit_count_ctors! {
    kilobits, "kilobit", KILO;
    megabits, "megabit", MEGA;
    gigabits, "gigabit", GIGA;
    terabits, "terabit", TERA;
    petabits, "petabit", PETA;
    exabits, "exabit", EXA;
    kibibits, "kibibit", KIBI;
    mebibits, "mebibit", MEBI;
    gibibits, "gibibit", GIBI;
    tebibits, "tebibit", TEBI;
    pebibits, "pebibit", PEBI;
    exbibits, "exbibit", EXBI;
}

impl_count_ops!(BitCount);

impl FromStr for BitCount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitCount {
    /// Formats the count with an SI prefix, a space before the unit, and one
    /// fractional digit unless the formatter specifies a precision. The
    /// alternate flag (`{:#}`) prints the raw number of bits instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.raw.fmt(f);
        }
        let style = Style {
            spaced: true,
            ..Style::plain()
        };
        let precision = Some(f.precision().unwrap_or(1));
        prefix::pad(f, &prefix::render_count(self.raw, style, precision, "bit", "bit"))
    }
}

/// Lazily formats a [`BitCount`] with the configured unit style.
#[derive(Debug, Clone, Copy)]
pub struct BitCountDisplay {
    value: BitCount,
    style: Style,
}

impl BitCountDisplay {
    /// Use binary (power-of-1024) prefixes instead of SI ones.
    pub const fn binary(mut self) -> Self {
        self.style.binary = true;
        self
    }

    /// Spell out prefix and unit words, e.g. `"kilobits"` instead of
    /// `"kbit"`.
    pub const fn long_names(mut self) -> Self {
        self.style.long_names = true;
        self
    }

    /// Insert a space between the digits and the unit.
    pub const fn spaced(mut self) -> Self {
        self.style.spaced = true;
        self
    }
}

impl fmt::Display for BitCountDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered =
            prefix::render_count(self.value.raw, self.style, f.precision(), "bit", "bit");
        prefix::pad(f, &rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_decomposition() {
        for (bits, bytes, rem) in [
            (0u64, 0u64, 0u64),
            (1, 0, 1),
            (7, 0, 7),
            (8, 1, 0),
            (8_888_888_888, 1_111_111_111, 0),
            (u64::MAX, u64::MAX >> 3, 7),
        ] {
            let (whole, remainder) = BitCount::new(bits).to_byte_count();
            assert_eq!(whole, ByteCount::new(bytes));
            assert_eq!(remainder, BitCount::new(rem));
            assert_eq!(whole.raw * 8 + remainder.raw, bits);
        }
    }

    #[test]
    fn test_constructors() {
        assert_eq!(BitCount::kilobits(32), BitCount::new(32_000));
        assert_eq!(BitCount::kibibits(32), BitCount::new(32_768));
        assert_eq!(BitCount::exabits(1), BitCount::new(1_000_000_000_000_000_000));
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(BitCount::new(5) + BitCount::new(8), BitCount::new(13));
        assert_eq!(BitCount::new(5) * 2, BitCount::new(10));
        assert_eq!(BitCount::kibibits(1) / BitCount::new(1024), BitCount::new(1));
        assert!(BitCount::new(15) < 16);
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn test_sub_underflow_panics() {
        let _ = BitCount::new(1) - BitCount::new(2);
    }

    #[test]
    fn test_display_default() {
        assert_eq!(BitCount::new(1).to_string(), "1 bit");
        assert_eq!(BitCount::kilobits(100).to_string(), "100.0 kbit");
        assert_eq!(format!("{:#}", BitCount::kilobits(100)), "100000");
    }
}

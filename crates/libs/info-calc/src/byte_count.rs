//! Non-negative counts of bytes.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::bit_count::BitCount;
use crate::bit_rate::BitRate;
use crate::errors::{OutOfRangeError, ParseError, TransferTimeError};
use crate::macros::impl_count_ops;
use crate::prefix::{
    self, Style, EXA, EXBI, GIBI, GIGA, KIBI, KILO, MEBI, MEGA, PEBI, PETA, TEBI, TERA,
};
use crate::scan::{self, PrefixBase, Spacing};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Represents a non-negative number of bytes.
///
/// Range: 0 bytes through 18446744073709551615 bytes (= 16 EiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteCount {
    /// Raw number of bytes.
    pub raw: u64,
}

impl ByteCount {
    /// Construct [`ByteCount`] from the provided raw number of bytes.
    pub const fn new(raw: u64) -> Self {
        Self { raw }
    }

    /// Construct [`ByteCount`] from the given number `n` of bytes.
    pub const fn bytes(n: u64) -> Self {
        Self::new(n)
    }

    /// Whether the count is zero.
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Convert the count to a number of bits.
    ///
    /// Fails if the top three bits of the byte value are set, i.e. if the
    /// result would not fit into 64 bits.
    ///
    /// ```rust
    /// # use info_calc::{BitCount, ByteCount};
    /// assert_eq!(ByteCount::new(2).to_bit_count(), Ok(BitCount::new(16)));
    /// assert!(ByteCount::new(u64::MAX).to_bit_count().is_err());
    /// ```
    pub const fn to_bit_count(self) -> Result<BitCount, OutOfRangeError> {
        if self.raw & (0b111 << 61) != 0 {
            return Err(OutOfRangeError);
        }
        Ok(BitCount::new(self.raw << 3))
    }

    /// Convert the count to a float value in the given unit.
    pub fn convert(self, unit: ByteCount) -> f64 {
        self.raw as f64 / unit.raw as f64
    }

    /// Convert the count to a float value in the given unit, rounded half
    /// away from zero at the given number of fractional digits.
    pub fn convert_round(self, unit: ByteCount, precision: u32) -> f64 {
        let p = 10f64.powi(precision as i32);
        (self.raw as f64 * p / unit.raw as f64).round() / p
    }

    /// Calculate the time it takes to transfer the bytes at the given rate.
    pub fn time_to_transfer(self, rate: BitRate) -> Result<TimeDelta, TransferTimeError> {
        if rate.raw == 0.0 {
            return Err(TransferTimeError::DivZeroRate);
        }
        let nanos = self.raw as f64 * 8.0 * NANOS_PER_SEC / rate.raw;
        if nanos.is_nan() || nanos < i64::MIN as f64 || nanos >= i64::MAX as f64 {
            return Err(TransferTimeError::OutOfRange);
        }
        Ok(TimeDelta::nanoseconds(nanos as i64))
    }

    /// Calculate the rate at which the bytes were transferred within the
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
        BitRate::new(self.raw as f64 * 8.0 / elapsed.as_seconds_f64())
    }

    /// Big-endian fixed-width encoding of the count.
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.raw.to_be_bytes()
    }

    /// Decode a count from its big-endian fixed-width encoding.
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::new(u64::from_be_bytes(bytes))
    }

    /// Canonical textual form, e.g. `"5000000 B"`.
    ///
    /// The result parses back via [`ByteCount::parse`].
    pub fn to_text(self) -> String {
        format!("{} B", self.raw)
    }

    /// Parse a human-readable byte count.
    ///
    /// A unit suffix is mandatory and may be separated from the numeral by a
    /// single space. SI and binary prefixes are both recognized, in
    /// abbreviated and spelled-out forms, case-insensitively.
    ///
    /// ```rust
    /// # use info_calc::ByteCount;
    /// assert_eq!(ByteCount::parse("210kB").unwrap(), ByteCount::new(210_000));
    /// assert_eq!(ByteCount::parse("210 kilobytes").unwrap(), ByteCount::new(210_000));
    /// assert_eq!(ByteCount::parse("2.5KiB").unwrap(), ByteCount::new(2_560));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        scan::parse_bytes(input, PrefixBase::Decimal, Spacing::Lenient).map(Self::new)
    }

    /// Same as [`ByteCount::parse`], except that SI prefixes scale by powers
    /// of 1024, so `"100 kB"` parses as 102400 bytes.
    pub fn parse_binary(input: &str) -> Result<Self, ParseError> {
        scan::parse_bytes(input, PrefixBase::Binary, Spacing::Lenient).map(Self::new)
    }

    /// Parse a byte count given as a single unbroken token.
    ///
    /// A bare numeral is taken as a number of bytes.
    pub fn parse_strict(input: &str) -> Result<Self, ParseError> {
        scan::parse_bytes(input, PrefixBase::Decimal, Spacing::Strict).map(Self::new)
    }

    /// Same as [`ByteCount::parse_strict`] with SI prefixes scaling by
    /// powers of 1024.
    pub fn parse_strict_binary(input: &str) -> Result<Self, ParseError> {
        scan::parse_bytes(input, PrefixBase::Binary, Spacing::Strict).map(Self::new)
    }

    /// Returns an object that formats the count with a configurable unit
    /// style.
    ///
    /// ```rust
    /// # use info_calc::ByteCount;
    /// let count = ByteCount::new(987_654_321);
    /// assert_eq!(count.display().to_string(), "987.654321MB");
    /// assert_eq!(count.display().binary().to_string(), "941.900559425354MiB");
    /// assert_eq!(
    ///     format!("{:.1}", count.display().spaced().long_names()),
    ///     "987.7 megabytes"
    /// );
    /// ```
    pub const fn display(self) -> ByteCountDisplay {
        ByteCountDisplay {
            value: self,
            style: Style::plain(),
        }
    }
}

macro_rules! byte_count_ctors {
    ($($func:ident, $unit:literal, $factor:expr;)*) => {
        impl ByteCount {
            $(
                #[doc = concat!("Construct [`ByteCount`] from the given number `n` of ", $unit, "s.")]
                pub const fn $func(n: u64) -> Self {
                    Self::new(n * $factor)
                }
            )*
        }
    };
}

byte_count_ctors! {
    kilobytes, "kilobyte", KILO;
    megabytes, "megabyte", MEGA;
    gigabytes, "gigabyte", GIGA;
    terabytes, "terabyte", TERA;
    petabytes, "petabyte", PETA;
    exabytes, "exabyte", EXA;
    kibibytes, "kibibyte", KIBI;
    mebibytes, "mebibyte", MEBI;
    gibibytes, "gibibyte", GIBI;
    tebibytes, "tebibyte", TEBI;
    pebibytes, "pebibyte", PEBI;
    exbibytes, "exbibyte", EXBI;
}

impl_count_ops!(ByteCount);

impl FromStr for ByteCount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ByteCount {
    /// Formats the count with an SI prefix, a space before the unit, and one
    /// fractional digit unless the formatter specifies a precision. The
    /// alternate flag (`{:#}`) prints the raw number of bytes instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.raw.fmt(f);
        }
        let style = Style {
            spaced: true,
            ..Style::plain()
        };
        let precision = Some(f.precision().unwrap_or(1));
        prefix::pad(f, &prefix::render_count(self.raw, style, precision, "B", "byte"))
    }
}

/// Lazily formats a [`ByteCount`] with the configured unit style.
#[derive(Debug, Clone, Copy)]
pub struct ByteCountDisplay {
    value: ByteCount,
    style: Style,
}

impl ByteCountDisplay {
    /// Use binary (power-of-1024) prefixes instead of SI ones.
    pub const fn binary(mut self) -> Self {
        self.style.binary = true;
        self
    }

    /// Spell out prefix and unit words, e.g. `"kilobytes"` instead of
    /// `"kB"`.
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

impl fmt::Display for ByteCountDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = prefix::render_count(self.value.raw, self.style, f.precision(), "B", "byte");
        prefix::pad(f, &rendered)
    }
}

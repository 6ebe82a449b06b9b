//! Bit rates: numbers of bits transferred or processed per second.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::bit_count::BitCount;
use crate::byte_count::ByteCount;
use crate::errors::{OutOfRangeError, ParseError};
use crate::prefix::{
    self, Style, EXA, EXBI, GIBI, GIGA, KIBI, KILO, MEBI, MEGA, PEBI, PETA, TEBI, TERA,
};
use crate::scan::{self, PrefixBase, Spacing};

/// Represents a number of bits that are transferred or processed per second.
///
/// Backed by an IEEE-754 double; NaN and infinities propagate through
/// arithmetic and comparisons with the usual float semantics, so a NaN rate
/// is never equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct BitRate {
    /// Raw number of bits per second.
    pub raw: f64,
}

impl BitRate {
    /// Construct [`BitRate`] from the provided raw number of bits per
    /// second.
    pub const fn new(raw: f64) -> Self {
        Self { raw }
    }

    /// Construct [`BitRate`] from the given number `n` of bits per second.
    pub const fn bits_per_second(n: f64) -> Self {
        Self::new(n)
    }

    /// Whether the rate is zero.
    pub fn is_zero(self) -> bool {
        self.raw == 0.0
    }

    /// Whether the rate is an IEEE-754 "not-a-number" value.
    pub fn is_nan(self) -> bool {
        self.raw.is_nan()
    }

    /// Whether the rate is positive or negative infinity.
    pub fn is_infinite(self) -> bool {
        self.raw.is_infinite()
    }

    /// Whether the rate is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.raw.is_finite()
    }

    /// Convert the rate to a float value in the given unit.
    pub fn convert(self, unit: BitRate) -> f64 {
        self.raw / unit.raw
    }

    /// Convert the rate to a float value in the given unit, rounded half
    /// away from zero at the given number of fractional digits.
    pub fn convert_round(self, unit: BitRate, precision: u32) -> f64 {
        let p = 10f64.powi(precision as i32);
        (self.raw * p / unit.raw).round() / p
    }

    /// Calculate the number of bits transferred at this rate within the
    /// given time.
    ///
    /// Fails if the rate is NaN or infinite, if exactly one of rate and
    /// duration is negative, or if the product exceeds the unsigned 64-bit
    /// range. A negative rate over a negative duration is a valid positive
    /// product.
    pub fn bit_count_given(self, elapsed: TimeDelta) -> Result<BitCount, OutOfRangeError> {
        let bits = self.bits_in(elapsed)?;
        Ok(BitCount::new(into_u64(bits.round())?))
    }

    /// Calculate the number of bytes transferred at this rate within the
    /// given time.
    ///
    /// Same failure conditions as [`BitRate::bit_count_given`].
    pub fn byte_count_given(self, elapsed: TimeDelta) -> Result<ByteCount, OutOfRangeError> {
        let bits = self.bits_in(elapsed)?;
        Ok(ByteCount::new(into_u64((bits / 8.0).round())?))
    }

    fn bits_in(self, elapsed: TimeDelta) -> Result<f64, OutOfRangeError> {
        if !self.raw.is_finite() {
            return Err(OutOfRangeError);
        }
        let secs = elapsed.as_seconds_f64();
        if (self.raw < 0.0) != (secs < 0.0) {
            return Err(OutOfRangeError);
        }
        // The signs agree, so the product is non-negative up to a -0.0.
        Ok((self.raw * secs).abs())
    }

    /// Big-endian fixed-width encoding of the rate's bit pattern.
    pub fn to_be_bytes(self) -> [u8; 8] {
        self.raw.to_bits().to_be_bytes()
    }

    /// Decode a rate from its big-endian fixed-width encoding.
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::new(f64::from_bits(u64::from_be_bytes(bytes)))
    }

    /// Canonical textual form, e.g. `"1234.5 bit/s"`.
    ///
    /// The result parses back via [`BitRate::parse`].
    pub fn to_text(self) -> String {
        format!("{} bit/s", self.raw)
    }

    /// Parse a human-readable bit rate.
    ///
    /// A unit suffix is mandatory and may be separated from the numeral by a
    /// single space. Both the compact suffixes (`"kbit/s"`, `"kbps"`) and
    /// the spelled-out three-token form (`"kilobits per second"`) are
    /// recognized, case-insensitively; the numeral may be signed, `nan`, or
    /// `[+-]inf`.
    ///
    /// ```rust
    /// # use info_calc::BitRate;
    /// assert_eq!(BitRate::parse("0.77 bps").unwrap(), BitRate::new(0.77));
    /// assert_eq!(
    ///     BitRate::parse("12345.678 kilobits per second").unwrap(),
    ///     BitRate::new(12_345_678.0)
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        scan::parse_rate(input, PrefixBase::Decimal, Spacing::Lenient).map(Self::new)
    }

    /// Same as [`BitRate::parse`], except that SI prefixes scale by powers
    /// of 1024, so `"1 kbps"` parses as 1024 bits per second.
    pub fn parse_binary(input: &str) -> Result<Self, ParseError> {
        scan::parse_rate(input, PrefixBase::Binary, Spacing::Lenient).map(Self::new)
    }

    /// Parse a bit rate given as a single unbroken token (the spelled-out
    /// `"per second"` continuation is still recognized).
    ///
    /// A bare numeral is taken as a number of bits per second.
    pub fn parse_strict(input: &str) -> Result<Self, ParseError> {
        scan::parse_rate(input, PrefixBase::Decimal, Spacing::Strict).map(Self::new)
    }

    /// Same as [`BitRate::parse_strict`] with SI prefixes scaling by powers
    /// of 1024.
    pub fn parse_strict_binary(input: &str) -> Result<Self, ParseError> {
        scan::parse_rate(input, PrefixBase::Binary, Spacing::Strict).map(Self::new)
    }

    /// Returns an object that formats the rate with a configurable unit
    /// style.
    ///
    /// ```rust
    /// # use info_calc::BitRate;
    /// let rate = BitRate::new(987_654_321.2345);
    /// assert_eq!(format!("{:.1}", rate.display()), "987.7Mbit/s");
    /// assert_eq!(format!("{:.1}", rate.display().bps()), "987.7Mbps");
    /// assert_eq!(
    ///     format!("{:.1}", rate.display().spaced().long_names()),
    ///     "987.7 megabits per second"
    /// );
    /// ```
    pub const fn display(self) -> BitRateDisplay {
        BitRateDisplay {
            value: self,
            style: Style::plain(),
            bps: false,
        }
    }
}

fn into_u64(value: f64) -> Result<u64, OutOfRangeError> {
    // `u64::MAX as f64` rounds up to 2^64 and must itself be rejected.
    if !(value >= 0.0 && value < u64::MAX as f64) {
        return Err(OutOfRangeError);
    }
    Ok(value as u64)
}

macro_rules! bit_rate_ctors {
    ($($func:ident, $unit:literal, $factor:expr;)*) => {
        impl BitRate {
            $(
                #[doc = concat!("Construct [`BitRate`] from the given number `n` of ", $unit, ".")]
                pub fn $func(n: f64) -> Self {
                    Self::new(n * $factor as f64)
                }
            )*
        }
    };
}

bit_rate_ctors! {
    kilobits_per_second, "kilobits per second", KILO;
    megabits_per_second, "megabits per second", MEGA;
    gigabits_per_second, "gigabits per second", GIGA;
    terabits_per_second, "terabits per second", TERA;
    petabits_per_second, "petabits per second", PETA;
    exabits_per_second, "exabits per second", EXA;
    kibibits_per_second, "kibibits per second", KIBI;
    mebibits_per_second, "mebibits per second", MEBI;
    gibibits_per_second, "gibibits per second", GIBI;
    tebibits_per_second, "tebibits per second", TEBI;
    pebibits_per_second, "pebibits per second", PEBI;
    exbibits_per_second, "exbibits per second", EXBI;
}

impl std::ops::Add for BitRate {
    type Output = BitRate;

    fn add(self, rhs: Self) -> BitRate {
        Self::new(self.raw + rhs.raw)
    }
}

impl std::ops::Sub for BitRate {
    type Output = BitRate;

    fn sub(self, rhs: Self) -> BitRate {
        Self::new(self.raw - rhs.raw)
    }
}

impl std::ops::Mul<f64> for BitRate {
    type Output = BitRate;

    fn mul(self, rhs: f64) -> BitRate {
        Self::new(self.raw * rhs)
    }
}

impl std::ops::Div<f64> for BitRate {
    type Output = BitRate;

    fn div(self, rhs: f64) -> BitRate {
        Self::new(self.raw / rhs)
    }
}

/// Ratio of two rates.
impl std::ops::Div for BitRate {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.raw / rhs.raw
    }
}

impl std::ops::Neg for BitRate {
    type Output = BitRate;

    fn neg(self) -> BitRate {
        Self::new(-self.raw)
    }
}

impl std::ops::AddAssign for BitRate {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for BitRate {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::MulAssign<f64> for BitRate {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl std::ops::DivAssign<f64> for BitRate {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl PartialEq<f64> for BitRate {
    fn eq(&self, other: &f64) -> bool {
        self.raw == *other
    }
}

impl PartialEq<BitRate> for f64 {
    fn eq(&self, other: &BitRate) -> bool {
        *self == other.raw
    }
}

impl PartialOrd<f64> for BitRate {
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        self.raw.partial_cmp(other)
    }
}

impl PartialOrd<BitRate> for f64 {
    fn partial_cmp(&self, other: &BitRate) -> Option<std::cmp::Ordering> {
        self.partial_cmp(&other.raw)
    }
}

impl From<f64> for BitRate {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<BitRate> for f64 {
    fn from(value: BitRate) -> f64 {
        value.raw
    }
}

impl FromStr for BitRate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitRate {
    /// Formats the rate with an SI prefix, a space before the unit, and one
    /// fractional digit unless the formatter specifies a precision. The
    /// alternate flag (`{:#}`) prints the raw number of bits per second
    /// instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.raw.fmt(f);
        }
        let style = Style {
            spaced: true,
            ..Style::plain()
        };
        let precision = Some(f.precision().unwrap_or(1));
        prefix::pad(f, &prefix::render_rate(self.raw, style, precision, false))
    }
}

/// Lazily formats a [`BitRate`] with the configured unit style.
#[derive(Debug, Clone, Copy)]
pub struct BitRateDisplay {
    value: BitRate,
    style: Style,
    bps: bool,
}

impl BitRateDisplay {
    /// Use binary (power-of-1024) prefixes instead of SI ones.
    pub const fn binary(mut self) -> Self {
        self.style.binary = true;
        self
    }

    /// Spell out the rate, e.g. `"kilobits per second"` instead of
    /// `"kbit/s"`. Overrides [`BitRateDisplay::bps`].
    pub const fn long_names(mut self) -> Self {
        self.style.long_names = true;
        self
    }

    /// Insert a space between the digits and the unit.
    pub const fn spaced(mut self) -> Self {
        self.style.spaced = true;
        self
    }

    /// Use the compact `"bps"` suffix, e.g. `"Mbps"` instead of `"Mbit/s"`.
    pub const fn bps(mut self) -> Self {
        self.bps = true;
        self
    }
}

impl fmt::Display for BitRateDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = prefix::render_rate(self.value.raw, self.style, f.precision(), self.bps);
        prefix::pad(f, &rendered)
    }
}

//! Helper crate to work with _bit counts, byte counts, and bit rates_.
//!
//! This crate provides three dedicated types, [`BitCount`], [`ByteCount`],
//! and [`BitRate`], to represent quantities of information. The count types
//! wrap a `u64` and support checked arithmetic with succinct operator
//! syntax; operators panic on over- and underflows to prevent subtly
//! incorrect counts. The rate type wraps an `f64` with the usual IEEE-754
//! semantics. In addition, this crate provides human-readable formatting and
//! tolerant parsing for all three types, with both SI (powers of 1000) and
//! binary (powers of 1024) unit prefixes.
//!
//!
//! ## Conversions
//!
//! The types convert to each other with explicit overflow handling:
//!
//! ```rust
//! # use info_calc::{BitCount, ByteCount};
//! assert_eq!(ByteCount::new(2).to_bit_count().unwrap(), BitCount::new(16));
//! assert!(ByteCount::new(u64::MAX).to_bit_count().is_err());
//!
//! let (bytes, bits) = BitCount::new(15).to_byte_count();
//! assert_eq!((bytes, bits), (ByteCount::new(1), BitCount::new(7)));
//!
//! assert_eq!(ByteCount::mebibytes(1).convert(ByteCount::kibibytes(1)), 1024.0);
//! ```
//!
//!
//! ## Calculations
//!
//! Counts and rates derive each other through elapsed time; results that
//! cannot be represented surface as errors, never as wrapped values:
//!
//! ```rust
//! # use info_calc::{BitRate, ByteCount, TimeDelta};
//! let size = ByteCount::kilobytes(1);
//! let rate = BitRate::kilobits_per_second(1.0);
//! assert_eq!(size.time_to_transfer(rate).unwrap(), TimeDelta::seconds(8));
//! assert_eq!(size.rate_given(TimeDelta::seconds(8)), BitRate::new(1000.0));
//! assert_eq!(rate.byte_count_given(TimeDelta::seconds(8)).unwrap(), ByteCount::new(1000));
//!
//! assert!(ByteCount::new(1).time_to_transfer(BitRate::new(0.0)).is_err());
//! assert!(ByteCount::exabytes(10).time_to_transfer(BitRate::new(1.0)).is_err());
//! ```
//!
//!
//! ## Formatting
//!
//! The default format uses an SI prefix, a space, and one fractional digit;
//! display adapters select binary prefixes, spelled-out unit names, and
//! more:
//!
//! ```rust
//! # use info_calc::ByteCount;
//! let size = ByteCount::new(987_654_321);
//! assert_eq!(format!("{size}"), "987.7 MB");
//! assert_eq!(format!("{size:.3}"), "987.654 MB");
//! assert_eq!(format!("{}", size.display()), "987.654321MB");
//! assert_eq!(format!("{}", size.display().binary()), "941.900559425354MiB");
//! assert_eq!(format!("{:.2}", size.display().spaced().long_names()), "987.65 megabytes");
//! ```
//!
//!
//! ## Parsing
//!
//! Parsing accepts a wide grammar of unit spellings, case-insensitively,
//! with optional pluralization and an optional single space before the
//! unit. SI prefixes can also be read as binary ones:
//!
//! ```rust
//! # use info_calc::{BitRate, ByteCount};
//! assert_eq!(ByteCount::parse("210kB").unwrap(), ByteCount::new(210_000));
//! assert_eq!(ByteCount::parse("210 kilobytes").unwrap(), ByteCount::new(210_000));
//! assert_eq!(ByteCount::parse_binary("100 kB").unwrap(), ByteCount::new(102_400));
//! assert_eq!(
//!     BitRate::parse("12.3 megabits per second").unwrap(),
//!     BitRate::megabits_per_second(12.3)
//! );
//! ```
//!
//!
//! ## Serialization and Deserialization
//!
//! By enabling the `serde` feature, all three types can be serialized and
//! deserialized. The count types always serialize as `u64` integers, the
//! rate as an `f64`. Deserialization is also supported from human-readable
//! strings.

pub mod atomic;
pub mod errors;

mod bit_count;
mod bit_rate;
mod byte_count;
mod macros;
mod prefix;
mod scan;
#[cfg(feature = "serde")]
mod serde;

pub use chrono::TimeDelta;

pub use crate::bit_count::{BitCount, BitCountDisplay};
pub use crate::bit_rate::{BitRate, BitRateDisplay};
pub use crate::byte_count::{ByteCount, ByteCountDisplay};

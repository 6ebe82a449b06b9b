//! Atomic cells for the value types.
//!
//! Thin wrappers over [`AtomicU64`]: the count types store their raw number
//! directly, the rate stores its IEEE-754 bit pattern. There is no logic
//! beyond the reinterpretation; memory ordering is the caller's choice, as
//! with the std atomics.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::bit_count::BitCount;
use crate::bit_rate::BitRate;
use crate::byte_count::ByteCount;

macro_rules! atomic_count {
    ($atomic:ident, $value:ident, $type:literal) => {
        #[doc = concat!("An atomic cell holding a [`", stringify!($value), "`].")]
        #[derive(Debug, Default)]
        pub struct $atomic(AtomicU64);

        impl $atomic {
            #[doc = concat!("Creates a new cell holding the given number of ", $type, ".")]
            pub const fn new(value: $value) -> Self {
                Self(AtomicU64::new(value.raw))
            }

            /// Consumes the cell and returns the contained value.
            pub fn into_inner(self) -> $value {
                $value::new(self.0.into_inner())
            }

            /// Atomically loads the value.
            pub fn load(&self, order: Ordering) -> $value {
                $value::new(self.0.load(order))
            }

            /// Atomically stores the value.
            pub fn store(&self, value: $value, order: Ordering) {
                self.0.store(value.raw, order);
            }

            /// Atomically replaces the value, returning the previous one.
            pub fn swap(&self, value: $value, order: Ordering) -> $value {
                $value::new(self.0.swap(value.raw, order))
            }

            /// Atomically adds to the value, returning the previous one.
            ///
            /// Wraps around on overflow, like the underlying atomic.
            pub fn fetch_add(&self, delta: $value, order: Ordering) -> $value {
                $value::new(self.0.fetch_add(delta.raw, order))
            }

            /// Atomically subtracts from the value, returning the previous
            /// one.
            ///
            /// Wraps around on underflow, like the underlying atomic.
            pub fn fetch_sub(&self, delta: $value, order: Ordering) -> $value {
                $value::new(self.0.fetch_sub(delta.raw, order))
            }
        }

        impl From<$value> for $atomic {
            fn from(value: $value) -> Self {
                Self::new(value)
            }
        }
    };
}

atomic_count!(AtomicBitCount, BitCount, "bits");
atomic_count!(AtomicByteCount, ByteCount, "bytes");

/// An atomic cell holding a [`BitRate`].
///
/// The rate's bit pattern is reinterpreted as an unsigned 64-bit integer for
/// the underlying atomic operations, so NaN payloads survive a round trip.
#[derive(Debug)]
pub struct AtomicBitRate(AtomicU64);

impl AtomicBitRate {
    /// Creates a new cell holding the given rate.
    pub fn new(value: BitRate) -> Self {
        Self(AtomicU64::new(value.raw.to_bits()))
    }

    /// Consumes the cell and returns the contained value.
    pub fn into_inner(self) -> BitRate {
        BitRate::new(f64::from_bits(self.0.into_inner()))
    }

    /// Atomically loads the value.
    pub fn load(&self, order: Ordering) -> BitRate {
        BitRate::new(f64::from_bits(self.0.load(order)))
    }

    /// Atomically stores the value.
    pub fn store(&self, value: BitRate, order: Ordering) {
        self.0.store(value.raw.to_bits(), order);
    }

    /// Atomically replaces the value, returning the previous one.
    pub fn swap(&self, value: BitRate, order: Ordering) -> BitRate {
        BitRate::new(f64::from_bits(self.0.swap(value.raw.to_bits(), order)))
    }
}

impl Default for AtomicBitRate {
    fn default() -> Self {
        Self::new(BitRate::new(0.0))
    }
}

impl From<BitRate> for AtomicBitRate {
    fn from(value: BitRate) -> Self {
        Self::new(value)
    }
}

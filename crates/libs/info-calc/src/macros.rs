//! Internal macros shared by the integral count types.

/// Implements checked arithmetic operators for a `u64` wrapper type.
///
/// All operators panic on overflow, underflow, and division by zero; silent
/// wraparound never produces an incorrect count. Recoverable failures are
/// reserved for the `Result`-returning operations.
macro_rules! impl_count_ops {
    ($name:ident) => {
        impl_count_ops!(@op $name, Add, add, AddAssign, add_assign, checked_add, "overflow in addition");
        impl_count_ops!(@op $name, Sub, sub, SubAssign, sub_assign, checked_sub, "underflow in subtraction");
        impl_count_ops!(@op $name, Mul, mul, MulAssign, mul_assign, checked_mul, "overflow in multiplication");
        impl_count_ops!(@op $name, Div, div, DivAssign, div_assign, checked_div, "division by zero");

        impl PartialEq<u64> for $name {
            fn eq(&self, other: &u64) -> bool {
                self.raw == *other
            }
        }

        impl PartialEq<$name> for u64 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.raw
            }
        }

        impl PartialOrd<u64> for $name {
            fn partial_cmp(&self, other: &u64) -> Option<std::cmp::Ordering> {
                self.raw.partial_cmp(other)
            }
        }

        impl PartialOrd<$name> for u64 {
            fn partial_cmp(&self, other: &$name) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.raw)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self::new(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> u64 {
                value.raw
            }
        }
    };
    (@op $name:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $msg:literal) => {
        impl std::ops::$trait<u64> for $name {
            type Output = $name;

            fn $method(self, rhs: u64) -> $name {
                Self::new(self.raw.$checked(rhs).expect($msg))
            }
        }

        impl std::ops::$trait for $name {
            type Output = $name;

            fn $method(self, rhs: Self) -> $name {
                std::ops::$trait::$method(self, rhs.raw)
            }
        }

        impl std::ops::$assign_trait<u64> for $name {
            fn $assign_method(&mut self, rhs: u64) {
                *self = std::ops::$trait::$method(*self, rhs);
            }
        }

        impl std::ops::$assign_trait for $name {
            fn $assign_method(&mut self, rhs: Self) {
                *self = std::ops::$trait::$method(*self, rhs.raw);
            }
        }
    };
}

pub(crate) use impl_count_ops;

//! Numeric helper traits for edge weights and queue priorities.

use std::cmp::Ordering;

/// Helper trait providing zero value for numeric types.
pub trait Zero {
    const ZERO: Self;
}

/// Helper trait, providing total ordering for non-`Ord` types,
/// such as `f64`, given its value is not `NaN`.
pub trait IntoOrd {
    /// Some substitute `Ord` type which can be used instead of `Self` for ordering purposes.
    /// Only should be used for comparisons, its value itself is meaningless.
    type Output: Ord;

    /// Convert self into `Ord`-supporting type `Self::Output`.
    fn into_ord(self) -> Self::Output;
}

/// Addition that reports overflow instead of panicking or wrapping.
/// Floats never overflow here, they saturate to infinity.
pub trait CheckedAdd: Sized {
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

impl Zero for f64 {
    const ZERO: f64 = 0.0;
}

impl Zero for f32 {
    const ZERO: f32 = 0.0;
}

impl CheckedAdd for f64 {
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl CheckedAdd for f32 {
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl IntoOrd for f64 {
    type Output = i64;

    fn into_ord(self) -> Self::Output {
        debug_assert!(!self.is_nan(), "NaN priority detected");
        // Same bit trick as `f64::total_cmp()`: flip the magnitude bits of negatives
        // so that the signed integer order matches the float order, infinities included.
        let x = self.to_bits() as i64;
        x ^ (((x >> 63) as u64) >> 1) as i64
    }
}

impl IntoOrd for f32 {
    type Output = i32;

    fn into_ord(self) -> Self::Output {
        debug_assert!(!self.is_nan(), "NaN priority detected");
        let x = self.to_bits() as i32;
        x ^ (((x >> 31) as u32) >> 1) as i32
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Zero for $t {
                const ZERO: $t = 0;
            }

            impl CheckedAdd for $t {
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }

            impl IntoOrd for $t {
                type Output = $t;

                #[inline]
                fn into_ord(self) -> Self::Output {
                    self
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// `true` if the weight is comparable and not below zero.
/// `NaN` is rejected along with negative values.
pub(crate) fn is_non_negative<W: PartialOrd + Zero>(w: &W) -> bool {
    matches!(w.partial_cmp(&W::ZERO), Some(Ordering::Greater) | Some(Ordering::Equal))
}

/// `true` if the value can be ordered at all (i.e. is not `NaN`).
pub(crate) fn is_comparable<W: PartialOrd>(w: &W) -> bool {
    w.partial_cmp(w).is_some()
}

#[test]
fn test_into_ord_f64() {
    let ord = |x: f64| x.into_ord();
    assert!(ord(0.0) > ord(-1.0));
    assert!(ord(0.0) < ord(1.0));
    assert!(ord(-1.0) < ord(1.0));
    assert!(ord(2.0) > ord(1.0));
    assert!(ord(-2.0) < ord(-1.0));
    assert!(ord(100.0) > ord(10.0));
    assert!(ord(f64::INFINITY) > ord(f64::MAX));
    assert!(ord(f64::NEG_INFINITY) < ord(f64::MIN));
}

#[test]
fn test_into_ord_f32() {
    let ord = |x: f32| x.into_ord();
    assert!(ord(0.5) < ord(0.75));
    assert!(ord(-0.5) > ord(-0.75));
    assert!(ord(-3.0) < ord(3.0));
    assert!(ord(f32::INFINITY) > ord(1e30));
}

#[test]
fn test_checked_add() {
    assert_eq!(CheckedAdd::checked_add(200_u8, 55), Some(255));
    assert_eq!(CheckedAdd::checked_add(200_u8, 100), None);
    assert_eq!(CheckedAdd::checked_add(i64::MAX, 1), None);
    assert_eq!(CheckedAdd::checked_add(1.5_f64, 2.0), Some(3.5));
    assert_eq!(CheckedAdd::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
}

#[test]
fn test_weight_checks() {
    assert!(is_non_negative(&0.0_f64));
    assert!(is_non_negative(&3_u32));
    assert!(!is_non_negative(&-1_i64));
    assert!(!is_non_negative(&-0.1_f64));
    assert!(!is_non_negative(&f64::NAN));
    assert!(is_comparable(&f64::INFINITY));
    assert!(!is_comparable(&f32::NAN));
}

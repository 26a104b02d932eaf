use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use num::{CheckedAdd, Zero};

pub type DefaultValue = i32;

/// A face of a die. Faces are summed, so they need addition and a zero to start from.
pub trait Value:
    Sized + Send + Sync + Debug + Copy + PartialEq + PartialOrd + Add<Output = Self> + Zero
{
    /// Total order used to key outcomes.
    fn order(&self, other: &Self) -> Ordering;

    /// Whether the face can take part in a sum without producing an unordered total.
    fn is_valid(&self) -> bool {
        true
    }

    /// `self + rhs`, or `None` when the sum does not fit the type.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

pub trait ComputableValue: Value {
    fn compute(&self) -> f64;
}

/// Outcome key ordered by [`Value::order`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ordered<T>(pub(crate) T);

macro_rules! impl_value_int {
    ($typ:ty, $compute:expr) => {
        impl $crate::value::Value for $typ {
            fn order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }

        impl $crate::value::ComputableValue for $typ {
            fn compute(&self) -> f64 {
                $compute(*self)
            }
        }
    };
}

// NaN of either sign sorts above every number.
macro_rules! impl_value_float {
    ($typ:ty) => {
        impl $crate::value::Value for $typ {
            fn order(&self, other: &Self) -> Ordering {
                match (self.is_nan(), other.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                }
            }

            fn is_valid(&self) -> bool {
                self.is_finite()
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs).filter(|x| x.is_finite())
            }
        }

        impl $crate::value::ComputableValue for $typ {
            fn compute(&self) -> f64 {
                f64::from(*self)
            }
        }
    };
}

impl<T> PartialEq for Ordered<T>
where
    T: Value,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.order(&other.0) == Ordering::Equal
    }
}

impl<T> Eq for Ordered<T> where T: Value {}

impl<T> PartialOrd for Ordered<T>
where
    T: Value,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ordered<T>
where
    T: Value,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.order(&other.0)
    }
}

impl_value_int!(u8, f64::from);
impl_value_int!(u16, f64::from);
impl_value_int!(u32, f64::from);
impl_value_int!(u64, |x: u64| x as f64);
impl_value_int!(u128, |x: u128| x as f64);
impl_value_int!(usize, |x: usize| x as f64);
impl_value_int!(i8, f64::from);
impl_value_int!(i16, f64::from);
impl_value_int!(i32, f64::from);
impl_value_int!(i64, |x: i64| x as f64);
impl_value_int!(i128, |x: i128| x as f64);
impl_value_int!(isize, |x: isize| x as f64);
impl_value_float!(f32);
impl_value_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_zero_signs_share_a_key() {
        assert_eq!(Ordered(0.0f64), Ordered(-0.0f64));
    }

    #[test]
    fn float_validity_rejects_non_finite() {
        assert!(1.5f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f32::INFINITY.is_valid());
        assert!(i32::MIN.is_valid());
    }

    #[test]
    fn nan_of_either_sign_sorts_last() {
        for nan in [f64::NAN, -f64::NAN] {
            assert_eq!(nan.order(&f64::MAX), Ordering::Greater);
            assert_eq!(f64::MIN.order(&nan), Ordering::Less);
            assert_eq!(nan.order(&f64::NAN), Ordering::Equal);
        }
    }

    #[test]
    fn sums_that_leave_the_type_are_none() {
        assert_eq!(Value::checked_add(i32::MAX, 1), None);
        assert_eq!(Value::checked_add(100i8, 27), Some(127));
        assert_eq!(Value::checked_add(f64::MAX, f64::MAX), None);
        assert_eq!(Value::checked_add(0.5f32, 0.25), Some(0.75));
    }

    #[test]
    fn ordered_keys_sort_by_value() {
        let mut keys = vec![Ordered(3.5), Ordered(-1.0), Ordered(2.0)];
        keys.sort();
        let sorted: Vec<f64> = keys.into_iter().map(|x| x.0).collect();
        assert_eq!(sorted, vec![-1.0, 2.0, 3.5]);
    }
}

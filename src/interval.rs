use std::fmt;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// A value usable as an interval endpoint.
///
/// Split values inside the tree are `f64`, so any endpoint type must convert
/// into `f64` without loss. That covers every integer type up to 32 bits as
/// well as `f32` and `f64`.
pub trait Endpoint: Copy + PartialOrd + Into<f64> {}

impl<T> Endpoint for T where T: Copy + PartialOrd + Into<f64> {}

/// A closed interval `[left, right]` carrying an opaque payload.
///
/// `left <= right` is a precondition of [`Interval::new`]; the tree never checks it.
/// Use [`Interval::try_new`] when the endpoints come from untrusted input.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<K, V = ()> {
    left: K,
    right: K,
    payload: V,
}

impl<K> Interval<K> {
    /// Interval without a payload.
    pub fn bare(left: K, right: K) -> Interval<K> {
        Interval::new(left, right, ())
    }
}

impl<K, V> Interval<K, V> {
    /// Creates an interval without validating its endpoints.
    pub fn new(left: K, right: K, payload: V) -> Interval<K, V> {
        Interval {
            left,
            right,
            payload,
        }
    }

    pub fn payload(&self) -> &V {
        &self.payload
    }

    pub fn into_payload(self) -> V {
        self.payload
    }
}

impl<K: Endpoint, V> Interval<K, V> {
    /// Creates an interval, rejecting NaN endpoints and `left > right`.
    ///
    /// ```
    /// use static_interval_tree::{Error, Interval};
    ///
    /// assert!(Interval::try_new(1, 5, "a").is_ok());
    /// assert_eq!(
    ///     Interval::try_new(5, 1, "b").unwrap_err(),
    ///     Error::OutOfOrder { left: 5.0, right: 1.0 }
    /// );
    /// ```
    pub fn try_new(left: K, right: K, payload: V) -> Result<Interval<K, V>> {
        let interval = Interval::new(left, right, payload);
        interval.validate()?;
        Ok(interval)
    }

    pub fn left(&self) -> K {
        self.left
    }

    pub fn right(&self) -> K {
        self.right
    }

    pub(crate) fn bounds(&self) -> (f64, f64) {
        (self.left.into(), self.right.into())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let (left, right) = self.bounds();
        if left.is_nan() || right.is_nan() {
            return Err(Error::NotANumber);
        }
        if left > right {
            return Err(Error::OutOfOrder { left, right });
        }
        Ok(())
    }

    /// True if `point` lies within `[left, right]`.
    pub fn contains_point<P: Into<f64>>(&self, point: P) -> bool {
        let point = point.into();
        let (left, right) = self.bounds();
        left <= point && point <= right
    }

    /// True if the two closed intervals share at least one point.
    pub fn overlaps<W>(&self, other: &Interval<K, W>) -> bool {
        let (left, right) = self.bounds();
        let (other_left, other_right) = other.bounds();
        left <= other_right && other_left <= right
    }

    /// True if `split` lies within `[left, right]`, meaning this interval is
    /// stored at a node splitting on `split`.
    pub(crate) fn spans(&self, split: f64) -> bool {
        self.contains_point(split)
    }
}

impl<K, V> fmt::Display for Interval<K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_reversed_endpoints() {
        assert_eq!(
            Interval::try_new(10, 4, ()),
            Err(Error::OutOfOrder {
                left: 10.0,
                right: 4.0
            })
        );
    }

    #[test]
    fn try_new_rejects_nan() {
        assert_eq!(Interval::try_new(f64::NAN, 1.0, ()), Err(Error::NotANumber));
        assert_eq!(Interval::try_new(1.0, f64::NAN, ()), Err(Error::NotANumber));
    }

    #[test]
    fn degenerate_interval_is_valid() {
        let point = Interval::try_new(3u8, 3u8, "p").unwrap();
        assert!(point.contains_point(3));
        assert!(!point.contains_point(2.99));
        assert_eq!(*point.payload(), "p");
    }

    #[test]
    fn closed_overlap() {
        let a = Interval::bare(1, 5);
        assert!(a.overlaps(&Interval::bare(5, 9)));
        assert!(a.overlaps(&Interval::bare(-3, 1)));
        assert!(a.overlaps(&Interval::bare(2, 3)));
        assert!(Interval::bare(2, 3).overlaps(&a));
        assert!(!a.overlaps(&Interval::bare(6, 9)));
    }

    #[test]
    fn display() {
        assert_eq!(Interval::new(4, 10, "x").to_string(), "[4, 10]");
        assert_eq!(Interval::bare(0.5, 1.25).to_string(), "[0.5, 1.25]");
    }
}

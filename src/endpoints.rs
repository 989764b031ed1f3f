//! Ordering of intervals and extraction of their distinct endpoints.

use crate::interval::{Endpoint, Interval};

/// Positions of `intervals` ordered ascending by left endpoint.
///
/// The sort is stable, so intervals sharing a left endpoint keep their input order.
pub fn sort_by_left<K: Endpoint, V>(intervals: &[Interval<K, V>]) -> Vec<usize> {
    sorted_positions(intervals, |interval| interval.left().into())
}

/// Positions of `intervals` ordered ascending by right endpoint.
pub fn sort_by_right<K: Endpoint, V>(intervals: &[Interval<K, V>]) -> Vec<usize> {
    sorted_positions(intervals, |interval| interval.right().into())
}

fn sorted_positions<K, V, F>(intervals: &[Interval<K, V>], key: F) -> Vec<usize>
where
    F: Fn(&Interval<K, V>) -> f64,
{
    let mut positions: Vec<usize> = (0..intervals.len()).collect();
    positions.sort_by(|&a, &b| key(&intervals[a]).total_cmp(&key(&intervals[b])));
    positions
}

/// Every value appearing as a left or right endpoint, ascending and without
/// duplicates. Empty input gives an empty sequence, which means "no tree".
/// NaN endpoints are left out, so they cannot become split values.
///
/// ```
/// use static_interval_tree::{endpoints::sorted_endpoints, Interval};
///
/// let intervals = vec![Interval::bare(4, 10), Interval::bare(1, 5), Interval::bare(5, 10)];
/// assert_eq!(sorted_endpoints(&intervals), vec![1.0, 4.0, 5.0, 10.0]);
/// ```
pub fn sorted_endpoints<K: Endpoint, V>(intervals: &[Interval<K, V>]) -> Vec<f64> {
    let mut endpoints: Vec<f64> = intervals
        .iter()
        .flat_map(|interval| {
            let (left, right) = interval.bounds();
            [left, right]
        })
        .filter(|endpoint| !endpoint.is_nan())
        .collect();
    endpoints.sort_by(f64::total_cmp);
    // -0.0 and 0.0 sort next to each other and compare equal, so they collapse too
    endpoints.dedup_by(|a, b| a == b);
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_endpoints() {
        let intervals: Vec<Interval<i32>> = vec![];
        assert!(sorted_endpoints(&intervals).is_empty());
        assert!(sort_by_left(&intervals).is_empty());
        assert!(sort_by_right(&intervals).is_empty());
    }

    #[test]
    fn endpoints_are_unique_and_ascending() {
        let intervals = vec![
            Interval::bare(15, 20),
            Interval::bare(1, 5),
            Interval::bare(4, 10),
            Interval::bare(5, 5),
            Interval::bare(10, 20),
        ];
        assert_eq!(
            sorted_endpoints(&intervals),
            vec![1.0, 4.0, 5.0, 10.0, 15.0, 20.0]
        );
    }

    #[test]
    fn negative_and_fractional_endpoints() {
        let intervals = vec![
            Interval::bare(-2.5, 0.0),
            Interval::bare(-0.0, 0.75),
            Interval::bare(-7.0, -2.5),
        ];
        assert_eq!(sorted_endpoints(&intervals), vec![-7.0, -2.5, 0.0, 0.75]);
    }

    #[test]
    fn nan_is_not_an_endpoint() {
        let intervals = vec![
            Interval::bare(1.0, 5.0),
            Interval::bare(f64::NAN, f64::NAN),
            Interval::bare(f64::NAN, 4.0),
        ];
        assert_eq!(sorted_endpoints(&intervals), vec![1.0, 4.0, 5.0]);
    }

    #[test]
    fn sorts_are_stable_permutations() {
        let intervals = vec![
            Interval::new(4, 10, 'a'),
            Interval::new(1, 12, 'b'),
            Interval::new(4, 6, 'c'),
            Interval::new(0, 6, 'd'),
        ];
        assert_eq!(sort_by_left(&intervals), vec![3, 1, 0, 2]);
        assert_eq!(sort_by_right(&intervals), vec![2, 3, 0, 1]);
    }
}

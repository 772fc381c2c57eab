//! Assertion macros for numeric results.

/// Assert that two floating-point values differ by at most `tolerance`.
///
/// ```rust
/// use colour_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f64, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two floating-point values agree to a relative tolerance.
///
/// Radiance values span many orders of magnitude, so absolute tolerances
/// are meaningless for them.
///
/// ```rust
/// use colour_test_helpers::assert_rel_eq;
///
/// assert_rel_eq!(2.0e13, 2.0000001e13, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_rel_eq {
    ($left:expr, $right:expr, $rtol:expr $(,)?) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let rtol: f64 = $rtol;
        let scale = left.abs().max(right.abs());
        let diff = (left - right).abs();
        if diff > rtol * scale {
            panic!(
                "assertion failed: `(left ≈ right)` (relative)\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  rtol: `{:?}`",
                left, right, diff, rtol
            );
        }
    };
}

/// Assert that a collection is sorted in ascending order.
///
/// ```rust
/// use colour_test_helpers::assert_sorted;
///
/// assert_sorted!(&["a", "b", "c"]);
/// ```
#[macro_export]
macro_rules! assert_sorted {
    ($collection:expr $(,)?) => {
        let collection = $collection;
        let mut iter = collection.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if prev > curr {
                    panic!(
                        "assertion failed: collection is not sorted\n  first unsorted pair at index {}: {:?} > {:?}",
                        i, prev, curr
                    );
                }
                prev = curr;
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_within_tolerance() {
        assert_approx_eq!(0.5_f64, 0.500_000_1, 1e-6);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_outside_tolerance() {
        assert_approx_eq!(0.5_f64, 0.6, 1e-6);
    }

    #[test]
    fn test_rel_eq_large_values() {
        assert_rel_eq!(20_472_701_909_806.5, 20_472_701_909_800.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "relative")]
    fn test_rel_eq_mismatch() {
        assert_rel_eq!(1.0e13, 1.1e13, 1e-6);
    }

    #[test]
    fn test_sorted() {
        assert_sorted!(&[1, 2, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "not sorted")]
    fn test_unsorted() {
        assert_sorted!(&[3, 1]);
    }
}

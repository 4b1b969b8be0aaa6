//! Score averaging and threshold grading.
//!
//! Both functions are pure and total over `i64`: no validation, no errors,
//! and safe to call from any thread.

use std::fmt;

/// Lowest score that earns [`Grade::Excellent`].
pub const EXCELLENT_THRESHOLD: i64 = 90;

/// Lowest score that earns [`Grade::Good`].
pub const GOOD_THRESHOLD: i64 = 70;

/// Categorical label assigned to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// Below [`GOOD_THRESHOLD`], negative scores included.
    Regular,
    /// From [`GOOD_THRESHOLD`] up to, not including, [`EXCELLENT_THRESHOLD`].
    Good,
    /// [`EXCELLENT_THRESHOLD`] or above.
    Excellent,
}

impl Grade {
    /// The fixed label for this grade.
    pub const fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Regular => "Regular",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Truncated integer average of two scores.
///
/// Division truncates toward zero, so `average(3, 4) == 3` and
/// `average(-3, 0) == -1`. The sum wraps on overflow instead of panicking.
pub const fn average(score1: i64, score2: i64) -> i64 {
    score1.wrapping_add(score2) / 2
}

/// Grade a score against the fixed thresholds.
///
/// The higher threshold is checked first, so boundary scores land in the
/// higher category.
pub const fn evaluate(points: i64) -> Grade {
    if points >= EXCELLENT_THRESHOLD {
        Grade::Excellent
    } else if points >= GOOD_THRESHOLD {
        Grade::Good
    } else {
        Grade::Regular
    }
}

/// Shorthand for `evaluate(points).label()`.
pub const fn grade_label(points: i64) -> &'static str {
    evaluate(points).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_two_scores() {
        assert_eq!(average(90, 80), 85);
        assert_eq!(average(-2, 2), 0);
    }

    #[test]
    fn average_truncates_toward_zero() {
        assert_eq!(average(3, 4), 3);
        assert_eq!(average(-3, 0), -1);
        assert_eq!(average(-3, -4), -3);
    }

    #[test]
    fn average_wraps_instead_of_panicking() {
        // i64::MAX + 1 wraps to i64::MIN, halved toward zero.
        assert_eq!(average(i64::MAX, 1), i64::MIN / 2);
    }

    #[test]
    fn evaluate_boundaries() {
        assert_eq!(evaluate(95), Grade::Excellent);
        assert_eq!(evaluate(90), Grade::Excellent);
        assert_eq!(evaluate(89), Grade::Good);
        assert_eq!(evaluate(70), Grade::Good);
        assert_eq!(evaluate(69), Grade::Regular);
        assert_eq!(evaluate(-10), Grade::Regular);
    }

    #[test]
    fn labels_are_fixed_strings() {
        assert_eq!(grade_label(95), "Excellent");
        assert_eq!(grade_label(75), "Good");
        assert_eq!(grade_label(0), "Regular");
        assert_eq!(Grade::Good.to_string(), "Good");
    }

    #[test]
    fn grade_ordering() {
        assert!(Grade::Regular < Grade::Good);
        assert!(Grade::Good < Grade::Excellent);
    }

    #[test]
    fn repeated_calls_agree() {
        for points in [-10, 0, 69, 70, 89, 90, 100] {
            assert_eq!(evaluate(points), evaluate(points));
        }
        assert_eq!(average(7, 8), average(7, 8));
    }

    #[test]
    fn usable_in_const_context() {
        const AVG: i64 = average(90, 80);
        const GRADE: Grade = evaluate(AVG);
        assert_eq!(GRADE, Grade::Good);
    }
}

//! @ai:module:intent Turn a NumberSet into SessionStats
//! @ai:module:layer domain
//! @ai:module:public_api compute_stats, StatsAggregator, StatsAggregatorTrait
//! @ai:module:stateless true

use crate::stats::types::{NumberSet, Parity, SessionStats};

/// @ai:intent Trait for statistics aggregation
pub trait StatsAggregatorTrait {
    /// @ai:intent Aggregate one number set into a statistics record
    fn aggregate(&self, numbers: &NumberSet) -> SessionStats;
}

/// @ai:intent Default even/odd aggregator
#[derive(Debug, Clone, Copy)]
pub struct StatsAggregator;

impl StatsAggregator {
    /// @ai:intent Create a new aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAggregatorTrait for StatsAggregator {
    fn aggregate(&self, numbers: &NumberSet) -> SessionStats {
        compute_stats(numbers)
    }
}

/// @ai:intent Compute sum and even/odd partitions of a number set
/// @ai:post even_count + odd_count == 5 and even_sum + odd_sum == total_sum
/// @ai:effects pure
pub fn compute_stats(numbers: &NumberSet) -> SessionStats {
    let (mut even_count, mut even_sum) = (0usize, 0i128);
    let (mut odd_count, mut odd_sum) = (0usize, 0i128);

    for n in numbers.iter() {
        match Parity::of(n) {
            Parity::Even => {
                even_count += 1;
                even_sum += i128::from(n);
            }
            Parity::Odd => {
                odd_count += 1;
                odd_sum += i128::from(n);
            }
        }
    }

    SessionStats {
        numbers: *numbers,
        total_sum: even_sum + odd_sum,
        even_count,
        even_sum,
        odd_count,
        odd_sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::SET_SIZE;
    use pretty_assertions::assert_eq;

    fn stats(numbers: [i64; SET_SIZE]) -> SessionStats {
        compute_stats(&NumberSet::new(numbers))
    }

    fn assert_partitions(s: &SessionStats) {
        let expected: i128 = s.numbers.iter().map(i128::from).sum();
        assert_eq!(s.even_count + s.odd_count, SET_SIZE);
        assert_eq!(s.even_sum + s.odd_sum, s.total_sum);
        assert_eq!(s.total_sum, expected);
        assert!(s.evens().all(|n| n.rem_euclid(2) == 0));
        assert!(s.odds().all(|n| n.rem_euclid(2) != 0));
        assert_eq!(s.evens().count(), s.even_count);
        assert_eq!(s.odds().count(), s.odd_count);
    }

    #[test]
    fn test_mixed_signs() {
        let s = stats([1, 2, 3, 4, -4]);

        assert_eq!(s.total_sum, 6);
        assert_eq!(s.even_count, 3);
        assert_eq!(s.even_sum, 2);
        assert_eq!(s.odd_count, 2);
        assert_eq!(s.odd_sum, 4);
        assert_partitions(&s);
    }

    #[test]
    fn test_all_zeros() {
        let s = stats([0; SET_SIZE]);

        assert_eq!(
            s,
            SessionStats {
                numbers: NumberSet::new([0; SET_SIZE]),
                total_sum: 0,
                even_count: 5,
                even_sum: 0,
                odd_count: 0,
                odd_sum: 0,
            }
        );
    }

    #[test]
    fn test_negative_odds() {
        let s = stats([-1, -3, -5, -7, -9]);

        assert_eq!(s.odd_count, 5);
        assert_eq!(s.odd_sum, -25);
        assert_eq!(s.even_count, 0);
        assert_partitions(&s);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        let s = stats([i64::MAX; SET_SIZE]);

        assert_eq!(s.total_sum, i128::from(i64::MAX) * 5);
        assert_partitions(&s);

        let s = stats([i64::MIN; SET_SIZE]);
        assert_eq!(s.even_sum, i128::from(i64::MIN) * 5);
        assert_partitions(&s);
    }

    #[test]
    fn test_partition_holds_across_samples() {
        let samples = [
            [7, -12, 0, 33, 100],
            [-2, -2, -2, 5, 5],
            [1, 1, 1, 1, 2],
            [i64::MAX, i64::MIN, -1, 1, 0],
        ];

        for sample in samples {
            assert_partitions(&stats(sample));
        }
    }

    #[test]
    fn test_aggregator_trait_matches_free_function() {
        let set = NumberSet::new([9, 8, 7, 6, 5]);
        assert_eq!(StatsAggregator::new().aggregate(&set), compute_stats(&set));
    }
}

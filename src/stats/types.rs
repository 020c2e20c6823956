//! @ai:module:intent Value types for one analysis run
//! @ai:module:layer domain
//! @ai:module:public_api NumberSet, SessionStats, Parity, SET_SIZE
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of integers collected for one analysis.
pub const SET_SIZE: usize = 5;

/// @ai:intent The fixed-size ordered input to one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSet([i64; SET_SIZE]);

impl NumberSet {
    /// @ai:intent Capture a set of numbers in entry order
    /// @ai:effects pure
    pub fn new(numbers: [i64; SET_SIZE]) -> Self {
        Self(numbers)
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }
}

/// Comma separated, as entered.
impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// @ai:intent Even/odd classification of a single integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// @ai:intent Classify an integer, treating negatives the same as positives
    /// @ai:post Parity::of(-4) == Even, Parity::of(-3) == Odd
    /// @ai:effects pure
    pub fn of(n: i64) -> Self {
        if n.rem_euclid(2) == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// @ai:intent Derived statistics for one NumberSet
/// @ai:invariant even_count + odd_count == SET_SIZE
/// @ai:invariant even_sum + odd_sum == total_sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub numbers: NumberSet,
    pub total_sum: i128,
    pub even_count: usize,
    pub even_sum: i128,
    pub odd_count: usize,
    pub odd_sum: i128,
}

impl SessionStats {
    /// @ai:intent Numbers classified as even, in entry order
    /// @ai:effects pure
    pub fn evens(&self) -> impl Iterator<Item = i64> + '_ {
        self.numbers.iter().filter(|&n| Parity::of(n) == Parity::Even)
    }

    /// @ai:intent Numbers classified as odd, in entry order
    /// @ai:effects pure
    pub fn odds(&self) -> impl Iterator<Item = i64> + '_ {
        self.numbers.iter().filter(|&n| Parity::of(n) == Parity::Odd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_of_negative_numbers() {
        assert_eq!(Parity::of(-4), Parity::Even);
        assert_eq!(Parity::of(-3), Parity::Odd);
        assert_eq!(Parity::of(-1), Parity::Odd);
        assert_eq!(Parity::of(0), Parity::Even);
    }

    #[test]
    fn test_parity_of_extremes() {
        assert_eq!(Parity::of(i64::MIN), Parity::Even);
        assert_eq!(Parity::of(i64::MAX), Parity::Odd);
    }

    #[test]
    fn test_number_set_display() {
        let set = NumberSet::new([1, -2, 3, 0, 42]);
        assert_eq!(set.to_string(), "1, -2, 3, 0, 42");
    }
}

//! Goldbach pair enumeration.
//!
//! `prime_pairs`, `verify_goldbach` and `goldbach_combinations` are total
//! functions: for odd, small or negative inputs they simply find nothing.
//! [`EvenTarget`] is the validated entry point used by the menu and the CLI.

use crate::error::{Error, Result};
use crate::primes::is_prime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two primes `low + high == n` with `low <= high`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePair {
    pub low: i64,
    pub high: i64,
}

impl PrimePair {
    pub fn sum(&self) -> i64 {
        self.low + self.high
    }
}

impl fmt::Display for PrimePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.low, self.high, self.sum())
    }
}

/// Enumerate prime pairs summing to `n`, in ascending order of the smaller prime.
///
/// Only `i` in `[2, n/2]` is tried, so each unordered pair appears once.
pub fn prime_pairs(n: i64) -> impl Iterator<Item = PrimePair> {
    (2..=n / 2)
        .filter(move |&i| is_prime(i) && is_prime(n - i))
        .map(move |i| PrimePair { low: i, high: n - i })
}

/// True as soon as one prime pair summing to `n` is found
pub fn verify_goldbach(n: i64) -> bool {
    prime_pairs(n).next().is_some()
}

/// Count every prime pair summing to `n`
pub fn goldbach_combinations(n: i64) -> usize {
    prime_pairs(n).count()
}

/// An even integer greater than 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct EvenTarget(i64);

impl EvenTarget {
    pub fn new(n: i64) -> Result<Self> {
        if n > 2 && n % 2 == 0 {
            Ok(Self(n))
        } else {
            Err(Error::InvalidTarget(n))
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn pairs(self) -> impl Iterator<Item = PrimePair> {
        prime_pairs(self.0)
    }

    pub fn verify(self) -> bool {
        verify_goldbach(self.0)
    }

    pub fn combinations(self) -> usize {
        goldbach_combinations(self.0)
    }

    /// Every even target from 4 up to and including `self`
    pub fn range_from_four(self) -> impl Iterator<Item = EvenTarget> {
        (4..=self.0).step_by(2).map(EvenTarget)
    }
}

impl TryFrom<i64> for EvenTarget {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self> {
        Self::new(n)
    }
}

impl From<EvenTarget> for i64 {
    fn from(target: EvenTarget) -> Self {
        target.0
    }
}

impl fmt::Display for EvenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pair count for one even number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub n: i64,
    pub count: usize,
}

impl RangeEntry {
    /// One `bar_char` per pair
    pub fn bar(&self, bar_char: char) -> String {
        std::iter::repeat(bar_char).take(self.count).collect()
    }
}

/// Pair counts for every even `n` in `4..=max_n`
pub fn range_counts(max_n: i64) -> Vec<RangeEntry> {
    let entries: Vec<RangeEntry> = (4..=max_n)
        .step_by(2)
        .map(|n| RangeEntry {
            n,
            count: goldbach_combinations(n),
        })
        .collect();

    log::debug!("range_counts({}): {} entries", max_n, entries.len());
    entries
}

/// First even `n` in `4..=max_n` with no prime pair, if any
pub fn find_counterexample(max_n: i64) -> Option<i64> {
    let found = (4..=max_n).step_by(2).find(|&n| !verify_goldbach(n));
    if let Some(n) = found {
        log::warn!("No prime pair found for {}", n);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_counts() {
        assert_eq!(goldbach_combinations(4), 1);
        assert_eq!(goldbach_combinations(10), 2);
        assert_eq!(goldbach_combinations(100), 6);
    }

    #[test]
    fn test_pairs_of_ten() {
        let pairs: Vec<PrimePair> = prime_pairs(10).collect();
        assert_eq!(
            pairs,
            vec![PrimePair { low: 3, high: 7 }, PrimePair { low: 5, high: 5 }]
        );
        assert_eq!(pairs[0].to_string(), "3 + 7 = 10");
    }

    #[test]
    fn test_pairs_are_ordered_and_unique() {
        for n in (4..=500).step_by(2) {
            let pairs: Vec<PrimePair> = prime_pairs(n).collect();
            for pair in &pairs {
                assert!(pair.low >= 2);
                assert!(pair.low <= pair.high);
                assert_eq!(pair.sum(), n);
                assert!(is_prime(pair.low) && is_prime(pair.high));
            }
            assert!(pairs.windows(2).all(|w| w[0].low < w[1].low));
        }
    }

    #[test]
    fn test_verify_matches_count() {
        for n in (4..=1000).step_by(2) {
            assert_eq!(verify_goldbach(n), goldbach_combinations(n) > 0);
            assert!(verify_goldbach(n));
        }
    }

    #[test]
    fn test_degenerate_inputs_find_nothing() {
        for n in [-10, -1, 0, 1, 2, 3] {
            assert!(!verify_goldbach(n));
            assert_eq!(goldbach_combinations(n), 0);
        }
        // Odd numbers only pair with 2
        assert_eq!(goldbach_combinations(9), 1);
        assert_eq!(goldbach_combinations(11), 0);
    }

    #[test]
    fn test_even_target_validation() {
        assert!(EvenTarget::new(4).is_ok());
        assert!(EvenTarget::new(100).is_ok());
        for n in [-4, 0, 1, 2, 3, 7, 99] {
            assert!(matches!(EvenTarget::new(n), Err(Error::InvalidTarget(v)) if v == n));
        }
    }

    #[test]
    fn test_even_target_delegates() {
        let target = EvenTarget::new(100).unwrap();
        assert_eq!(target.get(), 100);
        assert_eq!(target.combinations(), 6);
        assert!(target.verify());
        assert_eq!(target.pairs().count(), 6);
    }

    #[test]
    fn test_range_from_four() {
        let target = EvenTarget::new(10).unwrap();
        let values: Vec<i64> = target.range_from_four().map(EvenTarget::get).collect();
        assert_eq!(values, vec![4, 6, 8, 10]);
    }

    #[test]
    fn test_even_target_serde() {
        let target: EvenTarget = serde_json::from_str("12").unwrap();
        assert_eq!(target.get(), 12);
        assert!(serde_json::from_str::<EvenTarget>("13").is_err());
    }

    #[test]
    fn test_range_counts() {
        let entries = range_counts(8);
        assert_eq!(
            entries,
            vec![
                RangeEntry { n: 4, count: 1 },
                RangeEntry { n: 6, count: 1 },
                RangeEntry { n: 8, count: 1 },
            ]
        );
        assert_eq!(entries[0].bar('*'), "*");
        assert!(range_counts(3).is_empty());
    }

    #[test]
    fn test_bar_length() {
        let entry = RangeEntry { n: 100, count: 6 };
        assert_eq!(entry.bar('*'), "******");
        assert_eq!(RangeEntry { n: 0, count: 0 }.bar('#'), "");
    }

    #[test]
    fn test_no_counterexample() {
        assert_eq!(find_counterexample(2000), None);
    }
}

//! Primality testing and prime gap analysis.
//!
//! Everything here is recomputed on each call: there is no sieve and no
//! cache of primality results.

use serde::{Deserialize, Serialize};

/// Check whether `x` is prime by trial division up to `floor(sqrt(x))`.
///
/// Any integer is accepted. Values below 2 (including zero and negatives)
/// are never prime.
pub fn is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }

    let limit = integer_sqrt(x);
    let mut i = 2;
    while i <= limit {
        if x % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Largest `r` such that `r * r <= x`, for `x >= 0`.
///
/// The float estimate drifts for large `i64` values, so it is corrected
/// with exact integer arithmetic.
pub(crate) fn integer_sqrt(x: i64) -> i64 {
    if x < 2 {
        return x.max(0);
    }

    let mut r = (x as f64).sqrt() as i64;
    while r.checked_mul(r).map_or(true, |sq| sq > x) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= x) {
        r += 1;
    }
    r
}

/// Primes up to a bound with the gap to each one's predecessor.
///
/// `primes` and `gaps` are index-aligned. The first gap is a `0` sentinel
/// because the first prime has no predecessor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeGaps {
    pub primes: Vec<i64>,
    pub gaps: Vec<i64>,
}

impl PrimeGaps {
    /// Number of primes found
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Iterate `(prime, gap)` pairs in ascending prime order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.primes.iter().copied().zip(self.gaps.iter().copied())
    }

    /// Split into `(primes, gaps)`
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>) {
        (self.primes, self.gaps)
    }

    /// Aggregate statistics over the gap sequence
    pub fn summary(&self) -> GapSummary {
        // The leading sentinel is not a real gap.
        let real_gaps: Vec<(i64, i64)> = self.iter().skip(1).collect();

        let (max_gap, max_gap_end) = real_gaps
            .iter()
            .copied()
            .fold((0, None), |(best, at), (prime, gap)| {
                if gap > best {
                    (gap, Some(prime))
                } else {
                    (best, at)
                }
            });

        let mean_gap = if real_gaps.is_empty() {
            0.0
        } else {
            real_gaps.iter().map(|&(_, gap)| gap as f64).sum::<f64>() / real_gaps.len() as f64
        };

        GapSummary {
            prime_count: self.len(),
            largest_prime: self.primes.last().copied(),
            max_gap,
            max_gap_end,
            mean_gap,
            twin_primes: real_gaps.iter().filter(|&&(_, gap)| gap == 2).count(),
        }
    }
}

/// Summary of a [`PrimeGaps`] scan
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub prime_count: usize,
    pub largest_prime: Option<i64>,
    /// Largest gap between consecutive primes
    pub max_gap: i64,
    /// Prime that closes the largest gap (first occurrence)
    pub max_gap_end: Option<i64>,
    /// Mean gap, excluding the leading sentinel
    pub mean_gap: f64,
    /// Pairs of consecutive primes that differ by 2
    pub twin_primes: usize,
}

impl GapSummary {
    /// Format as a one-line summary
    pub fn summary_line(&self) -> String {
        match (self.largest_prime, self.max_gap_end) {
            (Some(largest), Some(end)) => format!(
                "Primes: {} | Largest: {} | Max gap: {} (ending at {}) | Mean gap: {:.2} | Twin pairs: {}",
                self.prime_count,
                largest,
                self.max_gap,
                end,
                self.mean_gap,
                self.twin_primes
            ),
            (Some(largest), None) => format!("Primes: {} | Largest: {}", self.prime_count, largest),
            _ => "Primes: 0".to_string(),
        }
    }
}

/// Scan `2..=max_n` and collect every prime with its gap to the previous one.
///
/// `max_n < 2` yields two empty sequences.
pub fn prime_gaps(max_n: i64) -> PrimeGaps {
    let mut result = PrimeGaps::default();
    let mut prev_prime: Option<i64> = None;

    for n in 2..=max_n.max(1) {
        if !is_prime(n) {
            continue;
        }
        result.gaps.push(prev_prime.map_or(0, |prev| n - prev));
        result.primes.push(n);
        prev_prime = Some(n);
    }

    log::debug!("prime_gaps({}): {} primes", max_n, result.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<i64> = (0..30).filter(|&x| is_prime(x)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_non_positive_not_prime() {
        for x in [-17, -2, -1, 0, 1] {
            assert!(!is_prime(x), "{} should not be prime", x);
        }
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_squares_of_primes() {
        // Divisor sits exactly on the square root bound
        assert!(!is_prime(4));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(10_403)); // 101 * 103
        assert!(!is_prime(1_018_081)); // 1009^2
    }

    #[test]
    fn test_larger_primes() {
        assert!(is_prime(7919));
        assert!(is_prime(1_000_003));
        assert!(is_prime(2_147_483_647));
    }

    #[test]
    fn test_matches_definition() {
        for x in 2..2000i64 {
            let has_divisor = (2..x).any(|d| d * d <= x && x % d == 0);
            assert_eq!(is_prime(x), !has_divisor, "mismatch at {}", x);
        }
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(99), 9);
        assert_eq!(integer_sqrt(100), 10);
        assert_eq!(integer_sqrt(i64::MAX), 3_037_000_499);
    }

    #[test]
    fn test_prime_gaps_to_ten() {
        let result = prime_gaps(10);
        assert_eq!(result.primes, vec![2, 3, 5, 7]);
        assert_eq!(result.gaps, vec![0, 1, 2, 2]);
    }

    #[test]
    fn test_prime_gaps_empty() {
        assert!(prime_gaps(1).is_empty());
        assert!(prime_gaps(-5).is_empty());
        assert_eq!(prime_gaps(1).into_parts(), (vec![], vec![]));
    }

    #[test]
    fn test_prime_gaps_inclusive_bound() {
        let result = prime_gaps(11);
        assert_eq!(result.primes.last(), Some(&11));
        assert_eq!(result.gaps.last(), Some(&4));
    }

    #[test]
    fn test_prime_gaps_aligned() {
        let result = prime_gaps(1000);
        assert_eq!(result.primes.len(), result.gaps.len());
        assert_eq!(result.len(), 168);
        for w in result.primes.windows(2).zip(result.gaps.iter().skip(1)) {
            let (pair, gap) = w;
            assert!(pair[1] > pair[0]);
            assert_eq!(pair[1] - pair[0], *gap);
        }
    }

    #[test]
    fn test_gap_summary() {
        let summary = prime_gaps(30).summary();
        assert_eq!(summary.prime_count, 10);
        assert_eq!(summary.largest_prime, Some(29));
        assert_eq!(summary.max_gap, 6);
        assert_eq!(summary.max_gap_end, Some(29));
        // (3,5) (5,7) (11,13) (17,19)
        assert_eq!(summary.twin_primes, 4);
        assert!((summary.mean_gap - 27.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_gap_summary_degenerate() {
        let empty = prime_gaps(0).summary();
        assert_eq!(empty.prime_count, 0);
        assert_eq!(empty.summary_line(), "Primes: 0");

        let single = prime_gaps(2).summary();
        assert_eq!(single.prime_count, 1);
        assert_eq!(single.max_gap_end, None);
        assert_eq!(single.summary_line(), "Primes: 1 | Largest: 2");
    }
}

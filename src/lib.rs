//! # goldbach
//!
//! Explore Goldbach's conjecture: every even integer greater than 2 is the
//! sum of two primes.
//!
//! ## Features
//!
//! - **Primality**: trial division up to the square root
//! - **Pairs**: enumerate, count and verify Goldbach prime pairs
//! - **Gaps**: primes up to a bound with the gap to each predecessor
//! - **Menu**: interactive console explorer over any reader/writer
//! - **Charts**: pair counts and prime gaps, rendered with egui (feature `gui`)
//!
//! ## Quick Start
//!
//! ```rust
//! use goldbach::{goldbach_combinations, prime_pairs, verify_goldbach};
//!
//! assert!(verify_goldbach(100));
//! assert_eq!(goldbach_combinations(100), 6);
//!
//! for pair in prime_pairs(10) {
//!     println!("{}", pair); // "3 + 7 = 10", "5 + 5 = 10"
//! }
//! ```
//!
//! ## Prime gaps
//!
//! ```rust
//! use goldbach::prime_gaps;
//!
//! let result = prime_gaps(10);
//! assert_eq!(result.primes, vec![2, 3, 5, 7]);
//! assert_eq!(result.gaps, vec![0, 1, 2, 2]);
//! ```
//!
//! ## Menu
//!
//! ```rust
//! use goldbach::menu::{Menu, MenuOutcome};
//! use std::io::Cursor;
//!
//! let mut menu = Menu::new(Cursor::new("1\n10\n"), Vec::new());
//! let outcome = menu.run().unwrap();
//! assert!(matches!(outcome, MenuOutcome::SingleNumber(_)));
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod goldbach;
pub mod menu;
pub mod primes;
pub mod report;

#[cfg(feature = "gui")]
pub mod gui;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use goldbach::{
    find_counterexample, goldbach_combinations, prime_pairs, range_counts, verify_goldbach,
    EvenTarget, PrimePair, RangeEntry,
};
pub use primes::{is_prime, prime_gaps, GapSummary, PrimeGaps};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        assert!(is_prime(97));
        assert_eq!(goldbach_combinations(10), 2);
        assert_eq!(prime_gaps(10).len(), 4);
        assert!(EvenTarget::new(6).is_ok());
    }
}

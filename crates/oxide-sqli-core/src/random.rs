//! Injectable random source.
//!
//! Random keyword casing and the evasion policy draw from an [`Entropy`]
//! handle carried by the [`Config`](crate::Config) instead of ambient global
//! state, so tests can render deterministically from a fixed seed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A shared, seedable random stream.
///
/// Cloning an `Entropy` shares the underlying stream: every clone draws from
/// the same sequence.
#[derive(Clone)]
pub struct Entropy {
    rng: Rc<RefCell<StdRng>>,
    seed: Option<u64>,
}

impl Entropy {
    /// Creates a stream seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::from_rng(&mut rand::rng()))),
            seed: None,
        }
    }

    /// Creates a deterministic stream from `seed`.
    ///
    /// The same seed always produces the same sequence of draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::seed_from_u64(seed))),
            seed: Some(seed),
        }
    }

    /// Returns the seed, if this stream was created with one.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns a value in `[0, upper)`, or `0` when `upper` is zero.
    #[must_use]
    pub fn below(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.borrow_mut().random_range(0..upper)
    }

    /// Returns a value in `[low, high]`.
    #[must_use]
    pub fn between(&self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.borrow_mut().random_range(low..=high)
    }

    /// Flips a fair coin.
    #[must_use]
    pub fn coin(&self) -> bool {
        self.rng.borrow_mut().random_bool(0.5)
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::from_os()
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy").field("seed", &self.seed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_repeat() {
        let a = Entropy::seeded(7);
        let b = Entropy::seeded(7);
        let left: Vec<usize> = (0..16).map(|_| a.below(100)).collect();
        let right: Vec<usize> = (0..16).map(|_| b.below(100)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_clones_share_stream() {
        let a = Entropy::seeded(11);
        let shared = a.clone();
        let fresh = Entropy::seeded(11);
        let first = fresh.below(1_000_000);
        let second = fresh.below(1_000_000);
        assert_eq!(a.below(1_000_000), first);
        assert_eq!(shared.below(1_000_000), second);
    }

    #[test]
    fn test_bounds() {
        let entropy = Entropy::seeded(3);
        assert_eq!(entropy.below(0), 0);
        assert_eq!(entropy.between(4, 4), 4);
        for _ in 0..64 {
            let n = entropy.between(1, 3);
            assert!((1..=3).contains(&n));
            assert!(entropy.below(5) < 5);
        }
    }
}

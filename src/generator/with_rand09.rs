//! Integration with `rand` (v0.9) crate.

#![cfg(feature = "rand09")]

use super::{FlakeGenerator, RandSource};
use rand_core09::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

#[cfg(feature = "std")]
impl<T: RngCore> FlakeGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.9) crate. The specified random number generator should be
    /// cryptographically strong and securely seeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "default_rng")]
    /// # {
    /// # use rand09 as rand;
    /// use simpleflake::FlakeGenerator;
    ///
    /// let mut g = FlakeGenerator::with_rand09(rand::rng());
    /// println!("{}", g.generate());
    /// # }
    /// ```
    pub const fn with_rand09(rng: T) -> Self {
        Self::with_rng(Adapter(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::generator::{FlakeGenerator, TimeSource};
    use rand09::{rngs::StdRng, SeedableRng as _};

    struct FixedTime(f64);

    impl TimeSource for FixedTime {
        fn unix_ts(&mut self) -> f64 {
            self.0
        }
    }

    /// Reproduces flakes from identically seeded rngs
    #[test]
    fn reproduces_flakes_from_identically_seeded_rngs() {
        let ts = 1_700_000_000.0;
        let mut a = FlakeGenerator::with_rand_and_time_sources(
            Adapter(StdRng::seed_from_u64(42)),
            FixedTime(ts),
        );
        let mut b = FlakeGenerator::with_rand_and_time_sources(
            Adapter(StdRng::seed_from_u64(42)),
            FixedTime(ts),
        );

        for _ in 0..1000 {
            let x = a.generate();
            assert_eq!(x, b.generate());
            assert_eq!(x.timestamp_field(), (ts - crate::DEFAULT_EPOCH) as u64 * 1000);
        }
    }
}

//! Simpleflake generator and related items.

use crate::{Flake, ParsedFlake, DEFAULT_EPOCH, MAX_RANDOM_BITS};

pub mod with_rand09;

#[cfg(feature = "default_rng")]
mod default_rng;

#[cfg(feature = "default_rng")]
use rand09::rngs::{OsRng, ReseedingRng};

/// Represents a simpleflake generator that packs the current time and random bits into new
/// identifiers.
///
/// The generator holds no state other than its epoch and the two sources it reads from, so
/// separate generators never need to coordinate. Identifiers generated within the same
/// millisecond are told apart only by their 23 random bits.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "default_rng")]
/// # {
/// use simpleflake::FlakeGenerator;
///
/// let mut g = FlakeGenerator::new();
/// println!("{}", g.generate());
///
/// let x = g.generate_with(Some(946702801.0), Some(5));
/// assert_eq!(x.to_u64(), 8388608005);
/// # }
/// ```
///
/// # Generator functions
///
/// The generator offers the following methods:
///
/// | Method                 | Timestamp        | Random bits            |
/// | ---------------------- | ---------------- | ---------------------- |
/// | [`generate`]           | Time source      | Random source          |
/// | [`generate_with`]      | Given or source  | Given or source        |
/// | [`consistentflake`]    | Time source      | Source, low 12 kept    |
///
/// None of them validates explicit arguments; see [`Flake::try_from_timestamp`] for the
/// checked path.
///
/// [`generate`]: FlakeGenerator::generate
/// [`generate_with`]: FlakeGenerator::generate_with
/// [`consistentflake`]: FlakeGenerator::consistentflake
#[derive(Clone, Debug)]
pub struct FlakeGenerator<R = DefaultRng, T = StdSystemTime> {
    epoch: f64,

    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl FlakeGenerator {
    /// Creates a generator object with the default random number generator and the system
    /// clock.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where the operating system's random number
    /// generator failed to provide secure entropy.
    pub fn new() -> Self {
        Self::with_rng(DefaultRng::default())
    }
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl Default for FlakeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> FlakeGenerator<R> {
    /// Creates a generator object with a specified random number generator and the system
    /// clock. The specified random number generator should be cryptographically strong and
    /// securely seeded.
    pub const fn with_rng(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> FlakeGenerator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    ///
    /// The generator uses [`DEFAULT_EPOCH`] until [`FlakeGenerator::with_epoch`] or
    /// [`FlakeGenerator::set_epoch`] says otherwise.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            rand_source,
            time_source,
        }
    }

    /// Returns this generator configured with a different epoch in seconds since the Unix
    /// epoch.
    pub fn with_epoch(self, epoch: f64) -> Self {
        Self { epoch, ..self }
    }

    /// Changes the epoch in seconds since the Unix epoch.
    pub fn set_epoch(&mut self, epoch: f64) {
        self.epoch = epoch;
    }

    /// Returns the epoch in seconds since the Unix epoch.
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Generates a new simpleflake object from the current timestamp and fresh random bits.
    pub fn generate(&mut self) -> Flake {
        self.generate_with(None, None)
    }

    /// Generates a new simpleflake object from the arguments given, reading the time source
    /// for an absent `timestamp` and the random source for absent `random_bits`.
    ///
    /// Explicit arguments are packed as they are: a `timestamp` before the epoch wraps around
    /// and `random_bits` of 2^23 or greater bleed into the `timestamp` field.
    pub fn generate_with(&mut self, timestamp: Option<f64>, random_bits: Option<u32>) -> Flake {
        let timestamp = timestamp.unwrap_or_else(|| self.time_source.unix_ts());
        let random_bits =
            random_bits.unwrap_or_else(|| self.rand_source.next_u32() & MAX_RANDOM_BITS);

        #[cfg(feature = "log")]
        if timestamp < self.epoch || timestamp.is_nan() {
            log::warn!("simpleflake: timestamp {} precedes epoch {}", timestamp, self.epoch);
        }
        #[cfg(feature = "log")]
        if random_bits > MAX_RANDOM_BITS {
            log::warn!("simpleflake: random bits {} exceed 23 bits", random_bits);
        }

        Flake::from_timestamp(timestamp, random_bits, self.epoch)
    }

    /// Generates a new simpleflake object that shares the consistent-hash id of `flake`.
    ///
    /// The new object carries the current timestamp and fresh random bits except for the low
    /// 12 bits, which are copied from `flake` so that both map to the same shard.
    pub fn consistentflake(&mut self, flake: Flake) -> Flake {
        self.generate().with_consistent_hash_id(flake.consistent_hash_id())
    }

    /// Decodes a simpleflake using the epoch of this generator.
    pub fn parse(&self, flake: Flake) -> ParsedFlake {
        flake.parse(self.epoch)
    }
}

impl<R: RandSource, T: TimeSource> Iterator for FlakeGenerator<R, T> {
    type Item = Flake;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for FlakeGenerator<R, T> {}

/// A trait that defines the minimum random number generator interface for
/// [`FlakeGenerator`].
pub trait RandSource {
    /// Returns the next random value.
    fn next_u32(&mut self) -> u32;
}

/// A trait that defines the minimum system clock interface for [`FlakeGenerator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in seconds, with a fractional part of at least
    /// millisecond resolution.
    fn unix_ts(&mut self) -> f64;
}

/// The default random number generator used by [`FlakeGenerator`].
///
/// Currently, `DefaultRng` uses [`ChaCha12Core`] that is initially seeded and subsequently
/// reseeded by [`OsRng`] every 64 kiB of random data using the [`ReseedingRng`] wrapper. It is
/// the same strategy as that employed by [`ThreadRng`]; see the docs of `rand` crate for a
/// detailed discussion on the strategy.
///
/// This structure exists to reduce the breaking changes in the future and is usable as a
/// random source only when the `default_rng` crate feature is enabled.
///
/// [`ChaCha12Core`]: https://docs.rs/rand_chacha/0.9/rand_chacha/struct.ChaCha12Core.html
/// [`OsRng`]: https://docs.rs/rand/0.9/rand/rngs/struct.OsRng.html
/// [`ReseedingRng`]: https://docs.rs/rand/0.9/rand/rngs/struct.ReseedingRng.html
/// [`ThreadRng`]: https://docs.rs/rand/0.9/rand/rngs/struct.ThreadRng.html
pub struct DefaultRng {
    _private: (),

    #[cfg(feature = "default_rng")]
    inner: ReseedingRng<rand_chacha::ChaCha12Core, OsRng>,
}

impl core::fmt::Debug for DefaultRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DefaultRng").finish_non_exhaustive()
    }
}

/// The default [`TimeSource`] that reads the system clock through `std::time::SystemTime`.
///
/// A clock set before 1970 yields negative timestamps rather than a panic.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl TimeSource for StdSystemTime {
    fn unix_ts(&mut self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(err) => -err.duration().as_secs_f64(),
        }
    }
}

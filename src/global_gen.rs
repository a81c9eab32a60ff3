use crate::{Flake, FlakeGenerator};
use std::cell::RefCell;

thread_local! {
    static G: RefCell<ThreadLocalGenerator> = RefCell::new(ThreadLocalGenerator::new());
}

/// A per-thread generator that starts over with a freshly seeded random number generator when
/// the process ID changes (i.e., upon process forks) so that a forked child does not replay the
/// random bits of its parent.
#[derive(Debug)]
struct ThreadLocalGenerator {
    gen: FlakeGenerator,
    #[cfg(unix)]
    pid: u32,
}

impl ThreadLocalGenerator {
    fn new() -> Self {
        #[cfg(feature = "log")]
        log::debug!("simpleflake: initialized thread-local generator");
        Self {
            gen: FlakeGenerator::new(),
            #[cfg(unix)]
            pid: std::process::id(),
        }
    }

    fn get(&mut self) -> &mut FlakeGenerator {
        #[cfg(unix)]
        {
            let pid = std::process::id();
            if pid != self.pid {
                #[cfg(feature = "log")]
                log::debug!("simpleflake: reset thread-local generator after fork");
                self.gen = FlakeGenerator::new();
                self.pid = pid;
            }
        }
        &mut self.gen
    }
}

/// Runs `f` with the generator of the current thread configured with `epoch`.
fn with_global_gen<U>(epoch: f64, f: impl FnOnce(&mut FlakeGenerator) -> U) -> U {
    G.with(|g| {
        let mut g = g.borrow_mut();
        let gen = g.get();
        gen.set_epoch(epoch);
        f(gen)
    })
}

/// Generates a new simpleflake object from the current time and fresh random bits, measured
/// from [`DEFAULT_EPOCH`](crate::DEFAULT_EPOCH).
///
/// This function is thread-safe without locking; each thread owns its generator. On Unix,
/// the generator of a thread is reseeded when the process ID changes (i.e., upon forks).
///
/// # Examples
///
/// ```rust
/// let x = simpleflake::simpleflake();
/// assert!(x.timestamp_field() > 0);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn simpleflake() -> Flake {
    with_global_gen(crate::DEFAULT_EPOCH, |g| g.generate())
}

/// Generates a new simpleflake as a 64-bit unsigned integer.
///
/// An absent `timestamp` (seconds since the Unix epoch) is read from the system clock, and
/// absent `random_bits` are drawn from the thread-local cryptographically strong random number
/// generator. Explicit arguments are not validated: a `timestamp` before `epoch` wraps around
/// and `random_bits` of 2^23 or greater bleed into the `timestamp` field.
///
/// # Examples
///
/// ```rust
/// use simpleflake::{generate, DEFAULT_EPOCH};
///
/// assert_eq!(generate(Some(946702801.0), Some(5), DEFAULT_EPOCH), 8388608005);
///
/// let x = generate(None, None, DEFAULT_EPOCH);
/// assert!(x > 8388608005);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn generate(timestamp: Option<f64>, random_bits: Option<u32>, epoch: f64) -> u64 {
    with_global_gen(epoch, |g| g.generate_with(timestamp, random_bits)).to_u64()
}

/// Generates a new simpleflake that shares the consistent-hash id of `flake`.
///
/// The result carries the current time and fresh random bits except for the low 12 bits,
/// which are copied from `flake`.
///
/// # Examples
///
/// ```rust
/// use simpleflake::{consistent_hash_id, consistentflake, DEFAULT_EPOCH};
///
/// let x = consistentflake(8388608005, DEFAULT_EPOCH);
/// assert_eq!(consistent_hash_id(x), 5);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn consistentflake(flake: u64, epoch: f64) -> u64 {
    with_global_gen(epoch, |g| g.consistentflake(Flake::from_u64(flake))).to_u64()
}

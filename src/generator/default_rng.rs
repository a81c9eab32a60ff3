use std::error;

use rand09::{rngs::OsRng, rngs::ReseedingRng, RngCore as _};

use super::{DefaultRng, RandSource};

impl RandSource for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

impl Default for DefaultRng {
    /// Creates an instance of the default random number generator.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where the operating system's random number generator
    /// failed to provide secure entropy.
    fn default() -> Self {
        match Self::try_new() {
            Ok(rng) => rng,
            Err(err) => panic!("could not initialize DefaultRng: {}", err),
        }
    }
}

impl DefaultRng {
    pub(crate) fn try_new() -> Result<Self, impl error::Error> {
        ReseedingRng::new(1024 * 64, OsRng).map(|inner| Self {
            _private: (),
            inner,
        })
    }
}

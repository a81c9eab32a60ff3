//! Simpleflake: 64-bit, roughly time-ordered, coordination-free unique identifiers
//!
//! ```rust
//! # #[cfg(feature = "global_gen")]
//! # {
//! let x = simpleflake::simpleflake();
//! println!("{}", x); // e.g., "3656838924387229981"
//!
//! let parsed = x.parse(simpleflake::DEFAULT_EPOCH);
//! println!("{} {}", parsed.timestamp, parsed.random_bits);
//! # }
//! ```
//!
//! # Field and bit layout
//!
//! A simpleflake is a 64-bit unsigned integer with two fields:
//!
//! ```text
//!  63                                           23 22                    0
//! +-----------------------------------------------+-----------------------+
//! |               timestamp (41 bits)             |  random bits (23 bits)|
//! +-----------------------------------------------+-----------------------+
//!                                                          |  hash (12)  |
//!                                                          +-------------+
//! ```
//!
//! - The 41-bit `timestamp` field holds the milliseconds elapsed since an epoch
//!   ([`DEFAULT_EPOCH`] unless specified otherwise).
//! - The 23-bit `random` field is filled with a cryptographically strong random number.
//! - The low 12 bits of the `random` field double as the consistent-hash id, which
//!   [`consistentflake`] carries over to a freshly generated identifier so that the new
//!   identifier maps to the same shard as the old one.
//!
//! Generators do not coordinate. Identifiers created within the same millisecond are
//! distinguished only by their random bits, so the collision probability follows the
//! birthday bound over 2^23 values per millisecond.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables, among others, the system clock as the default time source.
//! - `default_rng` (implies `std`) enables the default random number generator.
//! - `global_gen` (implies `default_rng`) enables the per-thread global generator and
//!   the [`simpleflake()`], [`generate()`], and [`consistentflake()`] functions.
//!
//! Optional features:
//!
//! - `serde` enables serialization/deserialization of [`Flake`] via serde.
//! - `rand09` enables an adapter for `rand::RngCore` to use `rand` (v0.9) and any other
//!   conforming random number generators with [`FlakeGenerator`].
//! - `log` emits diagnostics through the `log` facade.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod flake;
pub use flake::{consistent_hash_id, extract_bits, parse, FieldError, Flake, ParseError, ParsedFlake};

pub mod generator;
pub use generator::FlakeGenerator;

#[cfg(feature = "global_gen")]
mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{consistentflake, generate, simpleflake};

/// The bit width of the `timestamp` field.
pub const TIMESTAMP_BITS: u32 = 41;

/// The bit width of the `random` field.
pub const RANDOM_BITS: u32 = 64 - TIMESTAMP_BITS;

/// The left shift amount of the `random` field.
pub const RANDOM_SHIFT: u32 = 0;

/// The left shift amount of the `timestamp` field.
pub const TIMESTAMP_SHIFT: u32 = RANDOM_BITS;

/// The bit width of the consistent-hash id, taken from the low-order bits of the `random`
/// field.
pub const HASH_BITS: u32 = 12;

/// The mask selecting the consistent-hash id.
pub const HASH_MASK: u64 = (1 << HASH_BITS) - 1;

/// The maximum value of the 41-bit `timestamp` field.
pub const MAX_TIMESTAMP_FIELD: u64 = (1 << TIMESTAMP_BITS) - 1;

/// The maximum value of the 23-bit `random` field.
pub const MAX_RANDOM_BITS: u32 = (1 << RANDOM_BITS) - 1;

/// The default epoch in seconds since the Unix epoch, marking the start of the year 2000.
pub const DEFAULT_EPOCH: f64 = 946_702_800.0;

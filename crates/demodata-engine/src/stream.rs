//! Seeded pseudo-random draw stream.
//!
//! [`draw`] is a pure function from an integer seed to an `f64` in `[0, 1)`:
//! the seed is mixed with the splitmix64 golden-ratio constant and used to
//! seed a `StdRng`, from which a single value is taken. Identical seeds yield
//! identical outputs, and consecutive seeds are decorrelated by the mix.
//!
//! [`DrawStream`] threads a strictly increasing counter into the seed
//! (`mix(epoch) + base_offset + counter`), so every field drawn for every
//! record gets a distinct seed. The epoch is mixed before the counter is
//! added: raw epochs differ by one between adjacent windows, and an additive
//! seed would replay each window's sequence shifted by one step in the next
//! window. Each generator owns a disjoint base-offset range, which keeps
//! aggregate views independent from entity generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// splitmix64 golden-ratio increment; shared by the draw function and the
/// epoch mix.
const SEED_MIX: u64 = 0x9E3779B97F4A7C15;

/// Base offsets per generator. The ranges are far wider than any generator's
/// draw count, so streams never collide.
pub(crate) const CUSTOMERS_OFFSET: u64 = 0;
pub(crate) const INVENTORY_OFFSET: u64 = 10_000_000;
pub(crate) const ORDERS_OFFSET: u64 = 20_000_000;
pub(crate) const METRICS_OFFSET: u64 = 30_000_000;
pub(crate) const ALERTS_OFFSET: u64 = 40_000_000;

/// Produce a reproducible value in `[0, 1)` from an integer seed.
pub fn draw(seed: u64) -> f64 {
    let mixed = seed.wrapping_mul(SEED_MIX);
    StdRng::seed_from_u64(mixed).gen::<f64>()
}

/// A stream of decorrelated draws for one generator invocation.
///
/// The stream holds no entropy of its own; it only tracks the next seed.
/// Rebuilding a stream with the same epoch and base offset replays the exact
/// same sequence.
#[derive(Debug)]
pub struct DrawStream {
    base: u64,
    offset: u64,
}

impl DrawStream {
    pub fn new(epoch: u64, base_offset: u64) -> Self {
        Self {
            // Decorrelate the epoch up front so adjacent windows do not
            // share any seeds with each other.
            base: epoch.wrapping_mul(SEED_MIX),
            offset: base_offset,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let seed = self.base.wrapping_add(self.offset);
        self.offset = self.offset.wrapping_add(1);
        draw(seed)
    }

    /// Next value in the half-open range `[min, max)`.
    pub fn next_range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Next integer in the half-open range `[min, max)`.
    pub fn next_range_u32(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min < max);
        min + (self.next_f64() * f64::from(max - min)) as u32
    }

    /// Next integer in the inclusive range `[min, max]`.
    pub fn next_range_i64_inclusive(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        min + (self.next_f64() * span) as i64
    }

    /// Next index into a collection of the given length.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_f64() * len as f64) as usize
    }

    /// Pick an entry from a vocabulary slice.
    ///
    /// The shared vocabulary-selection helper used by all generators; index
    /// selection is never re-implemented per generator.
    pub fn pick<'a, T: ?Sized>(&mut self, vocab: &'a [&'a T]) -> &'a T {
        vocab[self.next_index(vocab.len())]
    }

    /// Pick an entry from a slice of copyable values (the closed enums).
    pub fn pick_copy<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_index(items.len())]
    }

    /// A string of exactly `len` decimal digits.
    pub fn next_digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.next_range_u32(0, 10) as u8))
            .collect()
    }

    /// A string of exactly `len` uppercase ASCII letters.
    pub fn next_upper_letters(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'A' + self.next_range_u32(0, 26) as u8))
            .collect()
    }
}

/// Round to two decimal places (money values).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place (percentage values).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

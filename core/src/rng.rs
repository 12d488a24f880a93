//! Shuffle sources for the carve
//!
//! The generator never reaches for global randomness: every call to
//! [`MazeGenerator::generate`](crate::MazeGenerator::generate) is handed a
//! [`DirectionShuffle`], so the same source state always yields the same maze.
//!
//! [`SimpleLCG`] is a Park-Miller Linear Congruential Generator (MINSTD):
//! - Multiplier (a): 48271
//! - Modulus (m): 2^31 - 1 = 2147483647
//!
//! Reference: https://en.wikipedia.org/wiki/Lehmer_random_number_generator

use alloc::vec::Vec;

use crate::direction::Direction;

/// Something that can put the four carve directions into a random order.
pub trait DirectionShuffle {
    /// Permute `dirs` in place.
    fn shuffle(&mut self, dirs: &mut [Direction; 4]);
}

impl<S: DirectionShuffle + ?Sized> DirectionShuffle for &mut S {
    fn shuffle(&mut self, dirs: &mut [Direction; 4]) {
        (**self).shuffle(dirs)
    }
}

/// Park-Miller Linear Congruential Generator
///
/// Generates a deterministic sequence of pseudo-random numbers from a seed.
/// Same seed always produces the same sequence.
#[derive(Clone, Debug)]
pub struct SimpleLCG {
    state: u32,
}

impl SimpleLCG {
    const A: u64 = 48271;
    const M: u64 = 2147483647; // 2^31 - 1

    /// Create a new LCG with the given seed
    ///
    /// If seed is 0, it's replaced with 1 to avoid degenerate sequence.
    /// Seeds are reduced modulo 2^31 - 1 for the same reason.
    pub fn new(seed: u32) -> Self {
        let state = (seed as u64 % Self::M) as u32;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    fn advance(&mut self) {
        // u64 keeps the multiplication from overflowing
        self.state = ((self.state as u64 * Self::A) % Self::M) as u32;
    }

    /// Choose random index from a range [0, len)
    ///
    /// Pure integer arithmetic, no floating point.
    pub fn choice_index(&mut self, len: usize) -> usize {
        self.advance();
        let scaled = (self.state as u64 * len as u64) / Self::M;
        scaled as usize
    }
}

impl DirectionShuffle for SimpleLCG {
    /// Fisher-Yates, walking from the back of the list.
    fn shuffle(&mut self, dirs: &mut [Direction; 4]) {
        for i in (1..dirs.len()).rev() {
            let j = self.choice_index(i + 1);
            dirs.swap(i, j);
        }
    }
}

/// Replays a fixed list of permutations, one per shuffle, cycling when it
/// runs out.
///
/// Each entry replaces the list wholesale, so fixtures can spell out exactly
/// which order every visited cell explores its neighbours in.
#[derive(Clone, Debug, Default)]
pub struct FixedShuffle {
    orders: Vec<[Direction; 4]>,
    next: usize,
}

impl FixedShuffle {
    pub fn new(orders: Vec<[Direction; 4]>) -> Self {
        Self { orders, next: 0 }
    }

    /// Same permutation for every cell
    pub fn repeat(order: [Direction; 4]) -> Self {
        Self::new(alloc::vec![order])
    }

    /// Number of shuffles served so far
    pub fn calls(&self) -> usize {
        self.next
    }
}

impl DirectionShuffle for FixedShuffle {
    fn shuffle(&mut self, dirs: &mut [Direction; 4]) {
        if !self.orders.is_empty() {
            *dirs = self.orders[self.next % self.orders.len()];
        }
        self.next += 1;
    }
}

//! Injectable random streams.
//!
//! Every roll in an encounter is drawn from one [`RngStream`] owned by the
//! encounter. Draws happen in a fixed order (hit roll, damage variance, crit
//! roll, crit variance), so replaying a seed reproduces the whole encounter.

use std::collections::VecDeque;

/// Source of uniform integer draws.
///
/// Implementations must be deterministic for a given construction.
pub trait RngStream: Send {
    /// Next raw 32-bit draw.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> i32 {
        self.range(1, 100)
    }

    /// `true` with probability `pct`%.
    fn roll_pct(&mut self, pct: i32) -> bool {
        self.roll_d100() <= pct
    }
}

impl<R: RngStream + ?Sized> RngStream for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }
}

/// Seeded PCG-XSH-RR stream (32-bit output, 64-bit state).
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgStream {
    state: u64,
}

impl PcgStream {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngStream for PcgStream {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix64-style avalanche so nearby seeds start far apart.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Replays a fixed list of draws.
///
/// Each call to [`RngStream::range`] pops the next scripted value and clamps
/// it into the requested range. Once the script is exhausted, draws fall back
/// to a [`PcgStream`] seeded with 0.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: VecDeque<i32>,
    fallback: PcgStream,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: PcgStream::new(0),
        }
    }

    /// Remaining scripted draws.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RngStream for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        match self.script.pop_front() {
            Some(value) => value as u32,
            None => self.fallback.next_u32(),
        }
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        match self.script.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => self.fallback.range(min, max),
        }
    }
}

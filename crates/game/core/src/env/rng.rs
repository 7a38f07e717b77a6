//! Deterministic random number generation.
//!
//! Every random decision an AI makes (hit rolls, wander direction, which rock
//! to dig) is drawn from here, so a run is fully reproducible from its seed.

/// Stateless RNG oracle: maps a seed to a value.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Mixes a base seed with a draw counter and an actor id into a fresh seed.
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stateful random stream over [`PcgRng`].
///
/// Each draw advances an internal counter, so two streams built from the same
/// seed yield identical sequences.
#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    nonce: u64,
    oracle: PcgRng,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            nonce: 0,
            oracle: PcgRng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a seed bound to `actor` and advances the stream.
    fn draw(&mut self, actor: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, actor);
        self.nonce = self.nonce.wrapping_add(1);
        seed
    }

    pub fn next_u32(&mut self, actor: u32) -> u32 {
        let seed = self.draw(actor);
        self.oracle.next_u32(seed)
    }

    pub fn roll_d100(&mut self, actor: u32) -> u32 {
        let seed = self.draw(actor);
        self.oracle.roll_d100(seed)
    }

    pub fn range(&mut self, actor: u32, min: u32, max: u32) -> u32 {
        let seed = self.draw(actor);
        self.oracle.range(seed, min, max)
    }

    /// Picks one element uniformly, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, actor: u32, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range(actor, 0, items.len() as u32 - 1) as usize;
        items.get(index)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0)
    }
}

//! Injectable randomness for card draws.

use rand::{rngs::StdRng, Error, RngCore, SeedableRng};

/// Seedable random source handed to pools and hands.
#[derive(Debug, Clone)]
pub struct DrawRng {
    seed: u64,
    rng: StdRng,
}

impl DrawRng {
    /// Deterministic source; the same seed always yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fresh seed taken from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Either of the above, depending on whether a seed was configured.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map(Self::from_seed).unwrap_or_else(Self::from_entropy)
    }

    /// Seed this source was created with, for reproducing a session.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for DrawRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_sequence() {
        let mut first = DrawRng::from_seed(7);
        let mut second = DrawRng::from_seed(7);
        let a: Vec<u32> = (0..5).map(|_| first.gen_range(0..100)).collect();
        let b: Vec<u32> = (0..5).map(|_| second.gen_range(0..100)).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 7);
    }
}

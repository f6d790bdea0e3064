//! RNG module - block selection
//!
//! Blocks are drawn uniformly and independently from the catalog; repeats are
//! allowed. Selection goes through [`BlockSource`] so games can be replayed
//! from a seed or driven by a fixed sequence in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Block;

/// Supplier of the next block to spawn.
pub trait BlockSource {
    fn next_block(&mut self) -> Block;
}

/// Uniform random blocks from a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomBlocks {
    rng: StdRng,
    seed: u64,
}

impl RandomBlocks {
    /// Create a source with the given seed (same seed, same blocks)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomBlocks {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl BlockSource for RandomBlocks {
    fn next_block(&mut self) -> Block {
        Block::ALL[self.rng.gen_range(0..Block::ALL.len())]
    }
}

/// Fixed, cycling block sequence.
#[derive(Debug, Clone)]
pub struct BlockSequence {
    blocks: Vec<Block>,
    next: usize,
}

impl BlockSequence {
    /// Cycle through `blocks` forever. An empty list yields `Block::I`.
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
            next: 0,
        }
    }
}

impl BlockSource for BlockSequence {
    fn next_block(&mut self) -> Block {
        if self.blocks.is_empty() {
            return Block::I;
        }
        let block = self.blocks[self.next % self.blocks.len()];
        self.next = self.next.wrapping_add(1);
        block
    }
}

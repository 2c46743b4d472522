//! RNG module - random batch generation
//!
//! Each hand is a batch of independently drawn pieces: a catalog shape chosen
//! uniformly, turned a uniformly chosen number of quarter turns. There is no
//! bag and no duplicate avoidance.
//!
//! Randomness goes through the [`RandomSource`] trait. [`SimpleRng`] is the
//! seeded default; [`SequenceRng`] replays a fixed script for scenario tests.

use arrayvec::ArrayVec;

use crate::pieces::{Piece, CATALOG_LEN};
use crate::types::{ShapeKind, MAX_BATCH_SIZE};

/// A hand of dealt pieces
pub type Hand = ArrayVec<Piece, MAX_BATCH_SIZE>;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current state; feeding it back to [`SimpleRng::new`] resumes the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG have short periods.
        self.state >> 8
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// `next_range(max)` yields `value % max`, so scripting
/// `[shape_index, rotations, ...]` pairs deals exact pieces.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Script that deals the given `(shape, rotations)` pairs in order
    pub fn dealing(pieces: &[(ShapeKind, u32)]) -> Self {
        let values = pieces
            .iter()
            .flat_map(|&(kind, rotations)| [catalog_index(kind) as u32, rotations])
            .collect();
        Self::new(values)
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        v
    }
}

fn catalog_index(kind: ShapeKind) -> usize {
    ShapeKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or_default()
}

/// Deals hands of random catalog pieces
#[derive(Debug, Clone)]
pub struct BatchGenerator<R> {
    rng: R,
    batch_size: usize,
    next_id: u64,
}

impl<R: RandomSource> BatchGenerator<R> {
    /// `batch_size` is capped at [`MAX_BATCH_SIZE`]
    pub fn new(rng: R, batch_size: usize) -> Self {
        Self {
            rng,
            batch_size: batch_size.min(MAX_BATCH_SIZE),
            next_id: 0,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Draw one piece: uniform shape, then uniform quarter turns
    pub fn generate_piece(&mut self) -> Piece {
        let shape_index = self.rng.next_range(CATALOG_LEN as u32) as usize;
        let kind = ShapeKind::ALL[shape_index];
        let rotations = self.rng.next_range(4);

        self.next_id = self.next_id.wrapping_add(1);
        Piece::from_catalog(self.next_id, kind, rotations)
    }

    /// Draw a full hand
    pub fn generate_batch(&mut self) -> Hand {
        let mut hand = Hand::new();
        for _ in 0..self.batch_size {
            hand.push(self.generate_piece());
        }
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;
    use crate::types::BATCH_SIZE;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(11) < 11);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_every_shape_and_rotation_is_reachable() {
        let mut generator = BatchGenerator::new(SimpleRng::new(99), BATCH_SIZE);
        let mut seen_kinds = std::collections::HashSet::new();
        let mut seen_rotations = std::collections::HashSet::new();
        for _ in 0..2000 {
            let piece = generator.generate_piece();
            seen_kinds.insert(piece.kind);
            let base = base_shape(piece.kind);
            let turns = (0..4).find(|&r| base.rotated(r) == piece.shape);
            assert!(turns.is_some());
            if piece.kind == ShapeKind::LBig {
                seen_rotations.insert(turns);
            }
        }
        assert_eq!(seen_kinds.len(), ShapeKind::ALL.len());
        assert_eq!(seen_rotations.len(), 4);
    }

    #[test]
    fn test_batch_has_configured_size_and_fresh_ids() {
        let mut generator = BatchGenerator::new(SimpleRng::new(1), BATCH_SIZE);
        let a = generator.generate_batch();
        let b = generator.generate_batch();
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);

        let mut ids: Vec<u64> = a.iter().chain(b.iter()).map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_batch_size_is_capped() {
        let generator = BatchGenerator::new(SimpleRng::new(1), 100);
        assert_eq!(generator.batch_size(), MAX_BATCH_SIZE);
    }

    #[test]
    fn test_sequence_rng_deals_scripted_pieces() {
        let rng = SequenceRng::dealing(&[(ShapeKind::H4, 1), (ShapeKind::Single, 0)]);
        let mut generator = BatchGenerator::new(rng, 2);
        let hand = generator.generate_batch();

        assert_eq!(hand[0].kind, ShapeKind::H4);
        assert_eq!(hand[0].shape, base_shape(ShapeKind::H4).rotate());
        assert_eq!(hand[1].kind, ShapeKind::Single);
        assert_eq!(hand[1].shape, base_shape(ShapeKind::Single));
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![3, 5]);
        assert_eq!(rng.next_u32(), 3);
        assert_eq!(rng.next_u32(), 5);
        assert_eq!(rng.next_u32(), 3);
        assert_eq!(SequenceRng::new(Vec::new()).next_u32(), 0);
    }
}

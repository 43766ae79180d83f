// src/services/sampling.rs
// DOCUMENTATION: Bounded random sampling
// PURPOSE: Uniform shuffle followed by truncation, shared by places and team picks

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `items` uniformly (Fisher-Yates) and keep at most `count` of them
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(count);
    items
}

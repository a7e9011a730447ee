// third-party imports
use rand::{Rng, seq::SliceRandom};

// ---

/// Tests whether a slice is missing or has no elements.
#[inline]
pub fn is_none_or_empty<T>(source: Option<&[T]>) -> bool {
    source.is_none_or(|items| items.is_empty())
}

// ---

/// Helpers for growing a `Vec` without duplicates.
pub trait VecExt<T> {
    /// Pushes `value` unless an equal element is already present.
    /// Returns `true` if the value was added.
    fn add_unique(&mut self, value: T) -> bool;

    /// Pushes each of `values` that is not yet present, returns how many were added.
    fn add_range_unique<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>;
}

impl<T: PartialEq> VecExt<T> for Vec<T> {
    fn add_unique(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.push(value);
        true
    }

    fn add_range_unique<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = 0;
        for value in values {
            if self.add_unique(value) {
                added += 1;
            }
        }
        added
    }
}

// ---

pub trait SliceExt {
    /// Shuffles the elements in place using the Fisher-Yates algorithm.
    ///
    /// The generator is passed explicitly, so a seeded one gives a reproducible order.
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl<T> SliceExt for [T] {
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffle(rng);
    }
}

// ---

/// Equality checks of a value against a list of candidates.
pub trait ValueExt: PartialEq + Sized {
    /// Tests whether the value equals any of `candidates`.
    fn equals_any(&self, candidates: &[Self]) -> bool {
        candidates.contains(self)
    }

    /// Tests whether the value differs from all of `candidates`.
    fn equals_none(&self, candidates: &[Self]) -> bool {
        !self.equals_any(candidates)
    }
}

impl<T: PartialEq> ValueExt for T {}

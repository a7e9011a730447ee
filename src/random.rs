// third-party imports
use rand::{Rng, seq::IndexedRandom};

/// Convenience draws on top of any [`Rng`].
///
/// There is no shared generator behind these helpers, the caller passes the one to use.
/// Seed it with [`rand::SeedableRng::seed_from_u64`] to get reproducible results.
pub trait RandomExt: Rng + Sized {
    /// Picks a random element, `None` for an empty slice.
    fn one_of<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }

    /// Returns a number in `min..max`.
    fn next_f64_in(&mut self, min: f64, max: f64) -> f64 {
        min + self.random::<f64>() * (max - min)
    }

    /// Returns a number in `min..max`.
    fn next_f32_in(&mut self, min: f32, max: f32) -> f32 {
        min + self.random::<f32>() * (max - min)
    }

    /// Returns a number in `0.0..1.0`.
    fn next_f32(&mut self) -> f32 {
        self.random()
    }

    fn next_bool(&mut self) -> bool {
        self.random_bool(0.5)
    }

    /// Returns a number in `min..=max` where values closer to `avg` are more likely.
    ///
    /// The weight of each value grows linearly from 1 at both bounds to its peak at `avg`,
    /// so `deviation(0, 10, 5)` yields 5 six times as often as 0 or 10.
    /// Returns `None` unless `min <= avg <= max`.
    fn deviation(&mut self, min: i32, max: i32, avg: i32) -> Option<i32> {
        if !(min <= avg && avg <= max) {
            return None;
        }

        let rising = u128::from(avg.abs_diff(min)) + 1;
        let falling = u128::from(max.abs_diff(avg));
        let (rising_total, falling_total) = (triangular(rising), triangular(falling));

        let ticket = self.random_range(0..rising_total + falling_total);
        if ticket < rising_total {
            let steps = i64::try_from(triangular_rank(ticket) - 1).ok()?;
            i32::try_from(i64::from(min) + steps).ok()
        } else {
            let mirrored = rising_total + falling_total - 1 - ticket;
            let steps = i64::try_from(triangular_rank(mirrored) - 1).ok()?;
            i32::try_from(i64::from(max) - steps).ok()
        }
    }
}

/// Sum of weights `1..=n`.
fn triangular(n: u128) -> u128 {
    n * (n + 1) / 2
}

/// Smallest `k` such that the first `k` weights `1..=k` cover `ticket`.
fn triangular_rank(ticket: u128) -> u128 {
    ((8 * ticket + 1).isqrt() - 1) / 2 + 1
}

impl<R: Rng> RandomExt for R {}

#[cfg(test)]
mod tests;

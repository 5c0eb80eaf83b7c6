//! Spawn context for symbol initialization.
//!
//! Gives the random placement helpers the simulator uses when a view mounts.
//! The RNG is borrowed from the simulator so a seeded scene lays out the same
//! way every run.

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use crate::viewport::{axis_range, Viewport};

/// Context for spawning one symbol set into a viewport.
pub struct SpawnContext<'a, R: Rng> {
    /// Viewport at mount time.
    pub viewport: Viewport,
    /// Half the symbol size; positions are inset by this much.
    pub half_size: f64,
    rng: &'a mut R,
}

impl<'a, R: Rng> SpawnContext<'a, R> {
    pub fn new(viewport: Viewport, symbol_size: f64, rng: &'a mut R) -> Self {
        Self {
            viewport,
            half_size: symbol_size * 0.5,
            rng,
        }
    }

    /// Random point on one axis, uniform within the inset range.
    fn random_on_axis(&mut self, dimension: f64) -> f64 {
        match axis_range(dimension, self.half_size) {
            Some((lo, hi)) if hi > lo => self.rng.gen_range(lo..hi),
            Some((lo, _)) => lo,
            None => 0.0,
        }
    }

    /// Random point fully inside the viewport.
    ///
    /// Axes narrower than a symbol pin to their midpoint. Unusable axes
    /// (zero or negative) place the symbol at zero until boundaries kick in.
    pub fn random_in_viewport(&mut self) -> DVec2 {
        let x = self.random_on_axis(self.viewport.width);
        let y = self.random_on_axis(self.viewport.height);
        DVec2::new(x, y)
    }

    /// Random angle in `[0, 2π)`.
    #[inline]
    pub fn random_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Velocity with a uniformly random heading and the given speed.
    pub fn random_velocity(&mut self, speed: f64) -> DVec2 {
        DVec2::from_angle(self.random_angle()) * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn positions_stay_inset() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ctx = SpawnContext::new(Viewport::new(300.0, 200.0), 40.0, &mut rng);
        for _ in 0..500 {
            let p = ctx.random_in_viewport();
            assert!(p.x >= 20.0 && p.x <= 280.0, "x out of range: {}", p.x);
            assert!(p.y >= 20.0 && p.y <= 180.0, "y out of range: {}", p.y);
        }
    }

    #[test]
    fn narrow_axis_pins_to_midpoint() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ctx = SpawnContext::new(Viewport::new(30.0, 200.0), 40.0, &mut rng);
        assert_eq!(ctx.random_in_viewport().x, 15.0);
    }

    #[test]
    fn velocities_have_requested_speed() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut ctx = SpawnContext::new(Viewport::new(300.0, 200.0), 40.0, &mut rng);
        for _ in 0..100 {
            let v = ctx.random_velocity(75.0);
            assert!((v.length() - 75.0).abs() < 1e-9);
        }
    }

    #[test]
    fn angles_cover_full_turn() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut ctx = SpawnContext::new(Viewport::new(10.0, 10.0), 1.0, &mut rng);
        let angles: Vec<f64> = (0..1000).map(|_| ctx.random_angle()).collect();
        assert!(angles.iter().all(|a| (0.0..TAU).contains(a)));
        assert!(angles.iter().any(|&a| a > 3.0 * TAU / 4.0));
        assert!(angles.iter().any(|&a| a < TAU / 4.0));
    }
}

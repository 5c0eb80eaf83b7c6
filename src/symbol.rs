//! The floating symbols themselves.

use glam::DVec2;

/// One floating label.
///
/// Label, size and mass are fixed at creation. Position and velocity are only
/// written by the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    index: usize,
    label: String,
    size: f64,
    mass: f64,
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
}

impl Symbol {
    pub(crate) fn new(
        index: usize,
        label: String,
        position: DVec2,
        velocity: DVec2,
        size: f64,
        mass: f64,
    ) -> Self {
        Self {
            index,
            label,
            size,
            mass,
            position,
            velocity,
        }
    }

    /// Position in the symbol set, stable for the symbol's lifetime.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Diameter in pixels.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Collision radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.size * 0.5
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Caller-supplied initial state, for layouts that must not be random.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSeed {
    pub label: String,
    pub position: DVec2,
    /// Only the direction is kept; the magnitude is replaced by the scene speed.
    pub velocity: DVec2,
}

impl SymbolSeed {
    pub fn new(label: impl Into<String>, position: DVec2, velocity: DVec2) -> Self {
        Self {
            label: label.into(),
            position,
            velocity,
        }
    }
}

/// What the renderer needs to draw one symbol for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolSprite<'a> {
    pub index: usize,
    pub position: DVec2,
    /// Radians, positive is clockwise on screen.
    pub rotation: f64,
    pub size: f64,
    pub label: &'a str,
}

/// Rescale `v` to exactly `speed`.
///
/// Degenerate vectors (zero, NaN, infinite) get direction +x.
#[inline]
pub fn fix_speed(v: DVec2, speed: f64) -> DVec2 {
    let len = v.length();
    if len.is_finite() && len > f64::EPSILON {
        v * (speed / len)
    } else {
        DVec2::new(speed, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_speed_keeps_direction() {
        let v = fix_speed(DVec2::new(3.0, 4.0), 10.0);
        assert!((v - DVec2::new(6.0, 8.0)).length() < 1e-12);
    }

    #[test]
    fn fix_speed_handles_degenerate_vectors() {
        assert_eq!(fix_speed(DVec2::ZERO, 5.0), DVec2::new(5.0, 0.0));
        assert_eq!(fix_speed(DVec2::new(f64::NAN, 1.0), 5.0), DVec2::new(5.0, 0.0));
    }

    #[test]
    fn radius_is_half_size() {
        let s = Symbol::new(0, "JS".into(), DVec2::ZERO, DVec2::X, 40.0, 1.0);
        assert_eq!(s.radius(), 20.0);
        assert_eq!(s.label(), "JS");
        assert_eq!(s.speed(), 1.0);
    }
}

//! Viewport geometry.

use glam::DVec2;

/// Size of the area symbols move in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    ///
    /// A window that has not been laid out yet reports zero; boundary checks
    /// are skipped until this turns true.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.size() * 0.5
    }
}

/// Anything that can report the current viewport size.
///
/// Read once at the start of every tick, so a resize between ticks is picked
/// up on the next one.
pub trait ViewportProvider {
    fn viewport(&self) -> Viewport;
}

impl ViewportProvider for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Legal centre range on one axis for a symbol of radius `half`.
///
/// Returns `None` when the dimension itself is unusable. When the axis is
/// narrower than the symbol, the range collapses onto the axis midpoint so
/// callers never see `min > max`.
pub(crate) fn axis_range(dimension: f64, half: f64) -> Option<(f64, f64)> {
    if !dimension.is_finite() || dimension <= 0.0 {
        return None;
    }
    let lo = half;
    let hi = dimension - half;
    if hi < lo {
        let mid = dimension * 0.5;
        Some((mid, mid))
    } else {
        Some((lo, hi))
    }
}

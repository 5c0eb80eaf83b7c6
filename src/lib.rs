//! # glyphfloat
//!
//! Animated backdrop of floating code symbols.
//!
//! A small set of labels (`{}`, `JS`, `Git`, ...) drift across a viewport at a
//! constant speed, bounce off its edges, wobble by a small random heading
//! change every tick and push off each other when they touch. The motion core
//! is plain Rust with no GPU or window dependency; a wgpu renderer and a winit
//! host are layered on top.
//!
//! ## Quick Start
//!
//! ```ignore
//! use glyphfloat::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let scene = SceneConfig::default().with_seed(7);
//!     glyphfloat::run(scene)
//! }
//! ```
//!
//! ## Driving the simulator yourself
//!
//! The simulator advances one fixed step per call and never fails:
//!
//! ```ignore
//! let view = Viewport::new(1280.0, 720.0);
//! let mut sim = SymbolSimulator::new(["JS", "Git"], view, MotionConfig::default(), Some(1));
//! for _ in 0..600 {
//!     sim.step(view);
//! }
//! for sprite in sim.snapshot() {
//!     println!("{} at {:?}, rotated {:.3}", sprite.label, sprite.position, sprite.rotation);
//! }
//! ```
//!
//! Hosts with their own frame callback mount an [`Animation`] instead. It owns
//! the simulator, a [`FrameClock`] throttle and a [`FrameScheduler`], and hands
//! every frame's snapshot to a [`SnapshotSink`].
//!
//! ## Invariants
//!
//! After every tick, for every symbol:
//! - speed equals [`MotionConfig::speed`];
//! - the centre lies within `[size/2, dimension - size/2]` on both axes, as
//!   long as the viewport has a valid size.

pub mod animation;
pub mod config;
pub mod error;
pub mod glyphs;
mod gpu;
pub mod simulation;
mod spawn;
pub mod symbol;
pub mod time;
pub mod viewport;
mod window;

pub use animation::{Animation, FrameOutcome, FrameScheduler, LoopState, SnapshotSink};
pub use config::{MotionConfig, SceneConfig, WindowConfig, DEFAULT_LABELS};
pub use error::{AppError, ConfigError, GpuError};
pub use glam::DVec2;
pub use simulation::SymbolSimulator;
pub use spawn::SpawnContext;
pub use symbol::{fix_speed, Symbol, SymbolSeed, SymbolSprite};
pub use time::FrameClock;
pub use viewport::{Viewport, ViewportProvider};
pub use window::{run, WindowScheduler};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use glyphfloat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{Animation, FrameOutcome, FrameScheduler, SnapshotSink};
    pub use crate::config::{MotionConfig, SceneConfig};
    pub use crate::error::AppError;
    pub use crate::simulation::SymbolSimulator;
    pub use crate::symbol::{SymbolSeed, SymbolSprite};
    pub use crate::time::FrameClock;
    pub use crate::viewport::{Viewport, ViewportProvider};
    pub use glam::DVec2;
}

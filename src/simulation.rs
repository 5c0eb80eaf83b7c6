//! Symbol motion simulator.
//!
//! Owns the symbol set for one mounted view and advances it one fixed step
//! per tick:
//!
//! 1. every symbol moves by `velocity * time_step * frame_scale`, reflects off
//!    the viewport edges and has its heading nudged by a small random angle;
//! 2. overlapping pairs are pushed apart and bounced off each other;
//! 3. positions are clamped back on screen.
//!
//! Speed is rescaled to the configured value after every change of
//! direction, so all symbols move at exactly the same speed after each tick.
//!
//! ```ignore
//! let scene = SceneConfig::default().with_seed(1);
//! let mut sim = SymbolSimulator::from_scene(&scene, Viewport::new(1280.0, 720.0));
//! sim.step(Viewport::new(1280.0, 720.0));
//! for sprite in sim.snapshot() {
//!     draw(sprite.label, sprite.position, sprite.rotation);
//! }
//! ```

use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{MotionConfig, SceneConfig, MAX_JITTER};
use crate::spawn::SpawnContext;
use crate::symbol::{fix_speed, Symbol, SymbolSeed, SymbolSprite};
use crate::viewport::{axis_range, Viewport, ViewportProvider};

/// One overlapping pair found during the collision pass.
#[derive(Debug, Clone, Copy)]
struct Contact {
    i: usize,
    j: usize,
    /// Unit vector from `i` towards `j`, taken before any correction.
    normal: DVec2,
}

/// Simulator for one mounted view.
pub struct SymbolSimulator {
    symbols: Vec<Symbol>,
    motion: MotionConfig,
    rng: SmallRng,
    ticks: u64,
    // Scratch space reused across ticks.
    push: Vec<DVec2>,
    contacts: Vec<Contact>,
}

impl SymbolSimulator {
    /// Create one symbol per label at a random position and heading.
    ///
    /// `seed` fixes the layout and the jitter sequence; `None` seeds from the OS.
    pub fn new<I, S>(
        labels: I,
        viewport: Viewport,
        motion: MotionConfig,
        seed: Option<u64>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = make_rng(seed);
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        let symbols = {
            let mut ctx = SpawnContext::new(viewport, motion.symbol_size, &mut rng);
            labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    let position = ctx.random_in_viewport();
                    let velocity = ctx.random_velocity(motion.speed);
                    Symbol::new(
                        index,
                        label,
                        position,
                        velocity,
                        motion.symbol_size,
                        motion.mass,
                    )
                })
                .collect()
        };

        Self::with_symbols(symbols, motion, rng)
    }

    /// Create the symbol set described by a scene.
    pub fn from_scene(scene: &SceneConfig, viewport: Viewport) -> Self {
        Self::new(
            scene.labels.iter().cloned(),
            viewport,
            scene.motion.clone(),
            scene.seed,
        )
    }

    /// Create symbols from explicit initial states.
    ///
    /// Velocities are rescaled to `motion.speed`; a zero velocity points along +x.
    pub fn from_seeds(seeds: Vec<SymbolSeed>, motion: MotionConfig, seed: Option<u64>) -> Self {
        let symbols = seeds
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                Symbol::new(
                    index,
                    s.label,
                    s.position,
                    fix_speed(s.velocity, motion.speed),
                    motion.symbol_size,
                    motion.mass,
                )
            })
            .collect();
        Self::with_symbols(symbols, motion, make_rng(seed))
    }

    fn with_symbols(symbols: Vec<Symbol>, motion: MotionConfig, rng: SmallRng) -> Self {
        let n = symbols.len();
        Self {
            symbols,
            motion,
            rng,
            ticks: 0,
            push: Vec::with_capacity(n),
            contacts: Vec::new(),
        }
    }

    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    /// Ticks applied since creation.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick, reading the viewport from `provider`.
    pub fn step_with<V: ViewportProvider + ?Sized>(&mut self, provider: &V) {
        self.step(provider.viewport());
    }

    /// Advance one tick against `viewport`.
    ///
    /// If the viewport is not yet laid out (zero or negative size), symbols
    /// still move and collide but edge reflection and clamping are skipped.
    pub fn step(&mut self, viewport: Viewport) {
        let bounded = viewport.is_valid();
        let speed = self.motion.speed;
        let dt = self.motion.time_step * self.motion.frame_scale;
        // Unvalidated configs may carry any value; keep the sampled range finite.
        let jitter = self.motion.max_jitter.min(MAX_JITTER);

        for symbol in &mut self.symbols {
            symbol.position += symbol.velocity * dt;

            if bounded {
                reflect_at_edges(symbol, viewport, speed);
            }

            if jitter > 0.0 {
                let angle = self.rng.gen_range(-jitter..=jitter);
                symbol.velocity = DVec2::from_angle(angle).rotate(symbol.velocity);
            }
            symbol.velocity = fix_speed(symbol.velocity, speed);
        }

        self.resolve_collisions();

        if bounded {
            for symbol in &mut self.symbols {
                clamp_into(symbol, viewport);
            }
        }

        self.ticks += 1;
    }

    /// Separate and bounce every overlapping pair.
    ///
    /// Contacts and pushes are computed from positions at the start of the
    /// pass and applied afterwards, so the order pairs are visited in does not
    /// affect positions. Velocity reflections are applied in ascending `(i, j)`
    /// order; a symbol is only reflected while it still moves towards the
    /// other one.
    fn resolve_collisions(&mut self) {
        let n = self.symbols.len();
        self.push.clear();
        self.push.resize(n, DVec2::ZERO);
        self.contacts.clear();

        for i in 0..n {
            for j in (i + 1)..n {
                let a = &self.symbols[i];
                let b = &self.symbols[j];
                let delta = b.position - a.position;
                let dist = delta.length();
                let reach = a.radius() + b.radius();
                // Coincident centres have no usable normal; NaN never passes.
                if !(dist > 0.0 && dist < reach) {
                    continue;
                }
                let normal = delta / dist;
                let half_overlap = (reach - dist) * 0.5;
                self.push[i] -= normal * half_overlap;
                self.push[j] += normal * half_overlap;
                self.contacts.push(Contact { i, j, normal });
            }
        }

        if self.contacts.is_empty() {
            return;
        }

        for (symbol, push) in self.symbols.iter_mut().zip(&self.push) {
            symbol.position += *push;
        }

        let speed = self.motion.speed;
        for c in &self.contacts {
            let vi = self.symbols[c.i].velocity;
            if vi.dot(c.normal) > 0.0 {
                self.symbols[c.i].velocity = fix_speed(reflect(vi, c.normal), speed);
            }
            let vj = self.symbols[c.j].velocity;
            if vj.dot(c.normal) < 0.0 {
                self.symbols[c.j].velocity = fix_speed(reflect(vj, c.normal), speed);
            }
        }
    }

    /// Per-symbol draw data for the current state.
    pub fn snapshot(&self) -> Vec<SymbolSprite<'_>> {
        let factor = self.motion.rotation_factor;
        self.symbols
            .iter()
            .map(|s| SymbolSprite {
                index: s.index(),
                position: s.position,
                rotation: s.velocity.x * factor,
                size: s.size(),
                label: s.label(),
            })
            .collect()
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

/// `v` mirrored about the plane with unit normal `n`.
#[inline]
fn reflect(v: DVec2, n: DVec2) -> DVec2 {
    v - n * (2.0 * v.dot(n))
}

/// Bounce `symbol` back inside `viewport` on every axis it has reached.
fn reflect_at_edges(symbol: &mut Symbol, viewport: Viewport, speed: f64) {
    let half = symbol.radius();
    let mut hit = false;

    for (axis, dimension) in [viewport.width, viewport.height].into_iter().enumerate() {
        let Some((lo, hi)) = axis_range(dimension, half) else {
            continue;
        };
        let p = symbol.position[axis];
        if p <= lo {
            if symbol.velocity[axis] < 0.0 {
                symbol.velocity[axis] = -symbol.velocity[axis];
            }
            symbol.position[axis] = lo;
            hit = true;
        } else if p >= hi {
            if symbol.velocity[axis] > 0.0 {
                symbol.velocity[axis] = -symbol.velocity[axis];
            }
            symbol.position[axis] = hi;
            hit = true;
        }
    }

    if hit {
        symbol.velocity = fix_speed(symbol.velocity, speed);
    }
}

fn clamp_into(symbol: &mut Symbol, viewport: Viewport) {
    let half = symbol.radius();
    for (axis, dimension) in [viewport.width, viewport.height].into_iter().enumerate() {
        if let Some((lo, hi)) = axis_range(dimension, half) {
            symbol.position[axis] = symbol.position[axis].clamp(lo, hi);
        }
    }
}

//! Animation loop for one mounted view.
//!
//! [`Animation`] ties a [`SymbolSimulator`] to the host's frame scheduler.
//! Mounting requests the first frame; every frame callback runs at most one
//! tick, hands the snapshot to a [`SnapshotSink`] and requests the next frame.
//! Unmounting cancels the scheduler and consumes the loop, so nothing can
//! tick after it.
//!
//! ```ignore
//! let mut anim = Animation::mount(simulator, FrameClock::default(), scheduler);
//!
//! // Host frame callback:
//! anim.on_frame(Instant::now(), &viewport, &mut renderer);
//!
//! // View goes away:
//! let simulator = anim.unmount();
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::simulation::SymbolSimulator;
use crate::symbol::SymbolSprite;
use crate::time::FrameClock;
use crate::viewport::ViewportProvider;

/// Host primitive that invokes the frame callback once before the next repaint.
pub trait FrameScheduler {
    /// Ask for one more frame callback.
    fn request_frame(&mut self);
    /// Stop delivering frame callbacks.
    fn cancel(&mut self);
}

/// Consumer of per-frame snapshots. Receives a borrowed view, writes nothing back.
pub trait SnapshotSink {
    fn present(&mut self, sprites: &[SymbolSprite<'_>]);
}

impl<F: FnMut(&[SymbolSprite<'_>])> SnapshotSink for F {
    fn present(&mut self, sprites: &[SymbolSprite<'_>]) {
        self(sprites)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// One tick ran and the new snapshot was presented.
    Stepped,
    /// Throttled or paused: the current snapshot was presented unchanged.
    Throttled,
    /// The loop is stopped; nothing ran or was presented.
    Stopped,
}

pub struct Animation<S: FrameScheduler> {
    simulator: SymbolSimulator,
    clock: FrameClock,
    scheduler: S,
    state: LoopState,
}

impl<S: FrameScheduler> Animation<S> {
    /// Start animating `simulator`. Requests the first frame.
    pub fn mount(simulator: SymbolSimulator, clock: FrameClock, mut scheduler: S) -> Self {
        info!(
            symbols = simulator.len(),
            min_interval_ms = clock.min_interval().as_secs_f64() * 1000.0,
            "mounting symbol animation"
        );
        scheduler.request_frame();
        Self {
            simulator,
            clock,
            scheduler,
            state: LoopState::Running,
        }
    }

    /// Frame callback.
    ///
    /// Reads the viewport once, runs at most one tick, presents the snapshot
    /// and re-registers for the next frame.
    pub fn on_frame<V, K>(&mut self, now: Instant, viewport: &V, sink: &mut K) -> FrameOutcome
    where
        V: ViewportProvider + ?Sized,
        K: SnapshotSink + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return FrameOutcome::Stopped;
        }

        let outcome = if self.clock.tick_at(now) {
            self.simulator.step(viewport.viewport());
            FrameOutcome::Stepped
        } else {
            FrameOutcome::Throttled
        };

        sink.present(&self.simulator.snapshot());
        self.scheduler.request_frame();
        outcome
    }

    /// Stop in place. Used by hosts that cannot give up ownership yet.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            self.scheduler.cancel();
            self.state = LoopState::Stopped;
            info!(ticks = self.simulator.ticks(), "symbol animation stopped");
        }
    }

    /// Tear the loop down and hand back the simulator.
    pub fn unmount(mut self) -> SymbolSimulator {
        self.stop();
        self.simulator
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
        debug!(paused = self.clock.is_paused(), "toggled pause");
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[inline]
    pub fn simulator(&self) -> &SymbolSimulator {
        &self.simulator
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotionConfig;
    use crate::symbol::SymbolSeed;
    use crate::viewport::Viewport;
    use glam::DVec2;
    use std::time::Duration;

    #[derive(Default)]
    struct Counter {
        requests: usize,
        cancels: usize,
    }

    impl FrameScheduler for Counter {
        fn request_frame(&mut self) {
            self.requests += 1;
        }
        fn cancel(&mut self) {
            self.cancels += 1;
        }
    }

    #[derive(Default)]
    struct Tally {
        presented: usize,
        last_len: usize,
    }

    impl SnapshotSink for Tally {
        fn present(&mut self, sprites: &[SymbolSprite<'_>]) {
            self.presented += 1;
            self.last_len = sprites.len();
        }
    }

    fn one_symbol() -> SymbolSimulator {
        let seeds = vec![SymbolSeed::new("JS", DVec2::new(100.0, 100.0), DVec2::X)];
        let motion = MotionConfig::default().with_jitter(0.0);
        SymbolSimulator::from_seeds(seeds, motion, None)
    }

    fn mount_default() -> Animation<Counter> {
        Animation::mount(one_symbol(), FrameClock::default(), Counter::default())
    }

    #[test]
    fn mount_requests_first_frame() {
        let anim = mount_default();
        assert_eq!(anim.scheduler().requests, 1);
        assert!(anim.is_running());
    }

    #[test]
    fn throttled_frames_present_without_stepping() {
        let mut anim = Animation::mount(
            one_symbol(),
            FrameClock::new(Duration::from_millis(16)),
            Counter::default(),
        );
        let view = Viewport::new(800.0, 600.0);
        let mut sink = Tally::default();

        let t0 = Instant::now();
        assert_eq!(anim.on_frame(t0, &view, &mut sink), FrameOutcome::Stepped);
        let early = anim.on_frame(t0 + Duration::from_millis(4), &view, &mut sink);
        assert_eq!(early, FrameOutcome::Throttled);
        let due = anim.on_frame(t0 + Duration::from_millis(17), &view, &mut sink);
        assert_eq!(due, FrameOutcome::Stepped);

        assert_eq!(sink.presented, 3);
        assert_eq!(sink.last_len, 1);
        assert_eq!(anim.simulator().ticks(), 2);
        assert_eq!(anim.scheduler().requests, 4);
    }

    #[test]
    fn paused_loop_holds_position() {
        let mut anim = mount_default();
        let view = Viewport::new(800.0, 600.0);
        let mut sink = Tally::default();
        anim.toggle_pause();
        let before = anim.simulator().symbols()[0].position();
        let outcome = anim.on_frame(Instant::now(), &view, &mut sink);
        assert_eq!(outcome, FrameOutcome::Throttled);
        assert_eq!(anim.simulator().symbols()[0].position(), before);
    }

    #[test]
    fn stopped_loop_ignores_frames() {
        let mut anim = mount_default();
        anim.stop();
        anim.stop();
        let mut sink = Tally::default();
        let view = Viewport::new(800.0, 600.0);
        let outcome = anim.on_frame(Instant::now(), &view, &mut sink);
        assert_eq!(outcome, FrameOutcome::Stopped);
        assert_eq!(sink.presented, 0);
        assert_eq!(anim.scheduler().cancels, 1);
        assert_eq!(anim.scheduler().requests, 1);
    }
}

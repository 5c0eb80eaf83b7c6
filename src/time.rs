//! Frame timing for the animation loop.
//!
//! The simulator always advances by a fixed step; wall-clock time only
//! decides *whether* a step runs. [`FrameClock`] throttles ticks to a minimum
//! interval, counts frames and keeps a running FPS figure.
//!
//! Every method that looks at the clock takes the current [`Instant`] so the
//! loop can be driven deterministically from tests.
//!
//! ```ignore
//! let mut clock = FrameClock::new(Duration::from_secs_f64(1.0 / 60.0));
//!
//! // In the redraw handler:
//! if clock.tick_at(Instant::now()) {
//!     simulator.step(viewport);
//! }
//! println!("FPS: {:.1}", clock.fps());
//! ```

use std::time::{Duration, Instant};

/// Throttle and frame statistics for one animation loop.
#[derive(Debug)]
pub struct FrameClock {
    /// Minimum gap between two applied ticks.
    min_interval: Duration,
    /// When the last tick was applied. `None` until the first one.
    last_tick: Option<Instant>,
    /// Ticks applied so far.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Option<Instant>,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    paused: bool,
}

impl FrameClock {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_tick: None,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: None,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Clock throttled to `seconds` between ticks. Negative or non-finite
    /// values disable throttling.
    pub fn from_secs(seconds: f64) -> Self {
        let interval = if seconds.is_finite() && seconds > 0.0 {
            Duration::from_secs_f64(seconds)
        } else {
            Duration::ZERO
        };
        Self::new(interval)
    }

    /// Decide whether a tick should run at `now`, and record it if so.
    ///
    /// The first call always runs. Later calls run once at least
    /// `min_interval` has passed since the last applied tick. A paused clock
    /// never runs.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        if let Some(last) = self.last_tick {
            if now.saturating_duration_since(last) < self.min_interval {
                return false;
            }
        }

        self.last_tick = Some(now);
        self.frame_count += 1;

        match self.fps_update_time {
            None => {
                self.fps_update_time = Some(now);
                self.fps_frame_count = self.frame_count;
            }
            Some(since) => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed >= self.fps_update_interval {
                    let frames = self.frame_count - self.fps_frame_count;
                    self.fps = frames as f32 / elapsed.as_secs_f32();
                    self.fps_frame_count = self.frame_count;
                    self.fps_update_time = Some(now);
                }
            }
        }

        true
    }

    /// Ticks applied since creation or the last reset.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Applied ticks per second, refreshed every half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause tick progression. Frames keep being drawn, symbols stand still.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after pausing.
    ///
    /// The next call to [`tick_at`](Self::tick_at) runs immediately.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_tick = None;
            self.fps_update_time = None;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Reset counters to their initial state, keeping the interval.
    pub fn reset(&mut self) {
        *self = Self::new(self.min_interval);
    }
}

impl Default for FrameClock {
    /// 60 Hz throttle.
    fn default() -> Self {
        Self::from_secs(1.0 / 60.0)
    }
}

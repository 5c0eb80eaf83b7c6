//! Integration tests for mounting and unmounting the animation loop.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use glyphfloat::{
    Animation, DVec2, FrameClock, FrameOutcome, FrameScheduler, LoopState, MotionConfig,
    SceneConfig, SnapshotSink, SymbolSimulator, SymbolSprite, Viewport,
};

const VIEW: Viewport = Viewport::new(640.0, 480.0);

/// Scheduler whose counters outlive the animation that owns it.
#[derive(Clone, Default)]
struct Recorder {
    requests: Rc<Cell<usize>>,
    cancels: Rc<Cell<usize>>,
}

impl FrameScheduler for Recorder {
    fn request_frame(&mut self) {
        self.requests.set(self.requests.get() + 1);
    }

    fn cancel(&mut self) {
        self.cancels.set(self.cancels.get() + 1);
    }
}

/// Sink that keeps an owned copy of the last snapshot.
#[derive(Default)]
struct Capture {
    frames: usize,
    last: Vec<(String, DVec2, f64)>,
}

impl SnapshotSink for Capture {
    fn present(&mut self, sprites: &[SymbolSprite<'_>]) {
        self.frames += 1;
        self.last = sprites
            .iter()
            .map(|s| (s.label.to_string(), s.position, s.rotation))
            .collect();
    }
}

fn simulator() -> SymbolSimulator {
    let scene = SceneConfig::default().with_seed(21);
    SymbolSimulator::from_scene(&scene, VIEW)
}

#[test]
fn mount_snapshot_unmount() {
    let recorder = Recorder::default();
    let clock = FrameClock::new(Duration::ZERO);
    let mut anim = Animation::mount(simulator(), clock, recorder.clone());
    assert_eq!(recorder.requests.get(), 1);
    assert_eq!(anim.state(), LoopState::Running);

    let mut sink = Capture::default();
    let t0 = Instant::now();
    for i in 0..5 {
        let now = t0 + Duration::from_millis(i * 16);
        let outcome = anim.on_frame(now, &VIEW, &mut sink);
        assert_eq!(outcome, FrameOutcome::Stepped);
    }
    assert_eq!(sink.frames, 5);
    assert_eq!(sink.last.len(), SceneConfig::default().labels.len());
    assert_eq!(recorder.requests.get(), 6);

    let sim = anim.unmount();
    assert_eq!(recorder.cancels.get(), 1);
    assert_eq!(sim.ticks(), 5);

    // The last presented frame matches the simulator handed back.
    for ((label, position, _), symbol) in sink.last.iter().zip(sim.symbols()) {
        assert_eq!(label, symbol.label());
        assert_eq!(*position, symbol.position());
    }

    // Nothing is left to request frames or tick.
    assert_eq!(recorder.requests.get(), 6);
    assert_eq!(Rc::strong_count(&recorder.requests), 1);
}

#[test]
fn stopped_loop_never_ticks_or_reschedules() {
    let recorder = Recorder::default();
    let clock = FrameClock::new(Duration::ZERO);
    let mut anim = Animation::mount(simulator(), clock, recorder.clone());
    let mut sink = Capture::default();

    anim.on_frame(Instant::now(), &VIEW, &mut sink);
    anim.stop();
    assert!(!anim.is_running());

    let requests = recorder.requests.get();
    for _ in 0..3 {
        let outcome = anim.on_frame(Instant::now(), &VIEW, &mut sink);
        assert_eq!(outcome, FrameOutcome::Stopped);
    }
    assert_eq!(recorder.requests.get(), requests);
    assert_eq!(anim.simulator().ticks(), 1);
    assert_eq!(sink.frames, 1);

    let _ = anim.unmount();
    assert_eq!(recorder.cancels.get(), 1);
}

#[test]
fn throttled_host_keeps_presenting() {
    let recorder = Recorder::default();
    let clock = FrameClock::new(Duration::from_millis(16));
    let mut anim = Animation::mount(simulator(), clock, recorder.clone());
    let mut sink = Capture::default();

    // A 240 Hz host calls back four times per allowed tick.
    let t0 = Instant::now();
    let mut stepped = 0;
    for i in 0..16u64 {
        let now = t0 + Duration::from_micros(i * 4_170);
        if anim.on_frame(now, &VIEW, &mut sink) == FrameOutcome::Stepped {
            stepped += 1;
        }
    }
    assert_eq!(sink.frames, 16);
    assert_eq!(recorder.requests.get(), 17);
    assert_eq!(anim.simulator().ticks(), stepped);
    assert!((4..=5).contains(&stepped), "stepped {stepped} times");
}

#[test]
fn paused_frames_hold_the_snapshot() {
    let recorder = Recorder::default();
    let motion = MotionConfig::default().with_jitter(0.0);
    let sim = SymbolSimulator::new(["JS", "Git"], VIEW, motion, Some(4));
    let mut anim = Animation::mount(sim, FrameClock::new(Duration::ZERO), recorder);
    let mut sink = Capture::default();

    anim.on_frame(Instant::now(), &VIEW, &mut sink);
    anim.pause();
    let held = sink.last.clone();
    for _ in 0..4 {
        let outcome = anim.on_frame(Instant::now(), &VIEW, &mut sink);
        assert_eq!(outcome, FrameOutcome::Throttled);
    }
    assert_eq!(sink.last, held);

    anim.resume();
    assert_eq!(anim.on_frame(Instant::now(), &VIEW, &mut sink), FrameOutcome::Stepped);
    assert_ne!(sink.last, held);
}

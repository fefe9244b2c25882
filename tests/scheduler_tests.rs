//! Fixed-timestep scheduler driven by a manual clock.

use tui_snake::core::{FrameClock, GameConfig, ManualClock, Scheduler};

#[derive(Default)]
struct Counts {
    updates: u32,
    renders: u32,
}

fn frame(s: &mut Scheduler<ManualClock>, advance_ms: u64, counts: &mut Counts) -> u32 {
    s.clock_mut().advance(advance_ms);
    let ts = s.clock_mut().take_frame().expect("frame requested");
    let mut handler = (|| counts.updates += 1, || ());
    let ticks = s.on_signal(ts, &mut handler);
    counts.renders += 1;
    ticks
}

#[test]
fn test_ticks_follow_elapsed_time() {
    let mut s = Scheduler::new(ManualClock::new(0), 140).unwrap();
    s.start();
    let mut counts = Counts::default();

    assert_eq!(frame(&mut s, 100, &mut counts), 0);
    assert_eq!(s.accumulator_ms(), 100);

    assert_eq!(frame(&mut s, 100, &mut counts), 1);
    assert_eq!(s.accumulator_ms(), 60);

    assert_eq!(frame(&mut s, 500, &mut counts), 4);
    assert_eq!(s.accumulator_ms(), 0);
    assert_eq!(counts.updates, 5);
}

#[test]
fn test_render_runs_once_per_frame() {
    let mut s = Scheduler::new(ManualClock::new(0), 10).unwrap();
    s.start();
    let mut updates = 0;
    let mut renders = 0;

    s.clock_mut().advance(95);
    let ts = s.clock_mut().take_frame().unwrap();
    let ticks = s.on_signal(ts, &mut (|| updates += 1, || renders += 1));

    assert_eq!(ticks, 9);
    assert_eq!(updates, 9);
    assert_eq!(renders, 1);
    assert!(s.clock().is_pending());
}

#[test]
fn test_catch_up_cap_drops_surplus() {
    let config = GameConfig {
        max_ticks_per_frame: Some(2),
        ..GameConfig::default()
    };
    let mut s = Scheduler::from_config(ManualClock::new(0), &config).unwrap();
    s.start();
    let mut counts = Counts::default();

    assert_eq!(frame(&mut s, 1000, &mut counts), 2);
    assert_eq!(s.accumulator_ms(), 1000 % 140);
}

#[test]
fn test_uncapped_scheduler_catches_up_fully() {
    let mut s = Scheduler::new(ManualClock::new(0), 140).unwrap();
    s.start();
    let mut counts = Counts::default();
    assert_eq!(frame(&mut s, 1400, &mut counts), 10);
}

#[test]
fn test_stopped_scheduler_ignores_signals() {
    let mut s = Scheduler::new(ManualClock::new(0), 140).unwrap();
    s.start();
    s.stop();
    assert!(!s.is_running());
    assert!(!s.clock().is_pending());

    let mut updates = 0;
    let mut renders = 0;
    let ts = s.clock_mut().advance(1000);
    assert_eq!(s.on_signal(ts, &mut (|| updates += 1, || renders += 1)), 0);
    assert_eq!((updates, renders), (0, 0));
}

#[test]
fn test_restart_does_not_replay_stopped_time() {
    let mut s = Scheduler::new(ManualClock::new(0), 140).unwrap();
    s.start();
    s.stop();
    s.clock_mut().advance(10_000);
    s.start();
    assert_eq!(s.clock().now_ms(), 10_000);

    let mut counts = Counts::default();
    assert_eq!(frame(&mut s, 150, &mut counts), 1);
}

#[test]
fn test_backwards_timestamp_adds_no_time() {
    let mut s = Scheduler::new(ManualClock::new(1000), 100).unwrap();
    s.start();
    let mut updates = 0;

    // Earlier than the start: nothing accumulates.
    let ticks = s.on_signal(900, &mut (|| updates += 1, || ()));
    assert_eq!(ticks, 0);
    assert_eq!(s.accumulator_ms(), 0);

    // Measured from 1000, not from 900.
    let ticks = s.on_signal(1100, &mut (|| updates += 1, || ()));
    assert_eq!(ticks, 1);
    assert_eq!(updates, 1);
    assert_eq!(s.accumulator_ms(), 0);
}

#[test]
fn test_zero_tick_interval_is_rejected() {
    assert!(Scheduler::new(ManualClock::new(0), 0).is_err());
    let s = Scheduler::new(ManualClock::new(0), 140).unwrap();
    assert!(s.with_max_ticks_per_frame(Some(0)).is_err());
}

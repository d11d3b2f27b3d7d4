use super::*;
use crate::{encode::sink::InMemorySink, foundation::core::Canvas};

fn script(duration: u64, taps: Vec<u64>) -> TapScript {
    TapScript {
        canvas: Canvas::new(60, 120).unwrap(),
        tick_ms: 20,
        duration,
        taps,
    }
}

fn run_headless(script: &TapScript) -> Playback {
    let mut playback = Playback::new(script).unwrap();
    while playback.skip_frame().is_some() {}
    playback
}

#[test]
fn untouched_script_stays_idle() {
    let playback = run_headless(&script(40, vec![]));
    assert_eq!(playback.stats().frames, 40);
    assert_eq!(playback.stats().rows_finished, 0);
    assert_eq!(playback.scene().chain().current(), 0);
    assert!(!playback.scene().clock().is_running());
}

#[test]
fn one_tap_finishes_the_first_row() {
    let playback = run_headless(&script(100, vec![0]));
    let stats = playback.stats();
    assert_eq!(stats.taps_accepted, 1);
    assert_eq!(stats.rows_finished, 1);

    let chain = playback.scene().chain();
    assert_eq!(chain.current(), 1);
    assert_eq!(chain.rows()[0].scale(), 1.0);
    assert!(chain.rows()[0].is_idle());
}

#[test]
fn taps_during_a_step_are_ignored() {
    let playback = run_headless(&script(100, vec![0, 5, 5, 30]));
    let stats = playback.stats();
    assert_eq!(stats.taps_accepted, 1);
    assert_eq!(stats.taps_ignored, 3);
    assert_eq!(stats.rows_finished, 1);
}

#[test]
fn unsorted_taps_are_applied_in_frame_order() {
    let sorted = run_headless(&script(200, vec![0, 90]));
    let shuffled = run_headless(&script(200, vec![90, 0]));
    assert_eq!(sorted.stats(), shuffled.stats());
    assert_eq!(sorted.scene().chain(), shuffled.scene().chain());
    assert_eq!(sorted.scene().chain().current(), 2);
}

#[test]
fn play_pushes_every_frame_in_order() {
    let mut sink = InMemorySink::new();
    let stats = play(&script(12, vec![2]), &mut sink).unwrap();
    assert_eq!(stats.frames, 12);
    assert!(sink.is_ended());
    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
    assert_eq!(sink.config().unwrap().width, 60);
}

#[test]
fn render_frame_at_matches_the_streamed_frame() {
    let s = script(20, vec![1]);
    let mut sink = InMemorySink::new();
    play(&s, &mut sink).unwrap();

    let single = render_frame_at(&s, FrameIndex(9)).unwrap();
    assert_eq!(single, sink.frames()[9].1);
}

#[test]
fn render_frame_at_rejects_frames_past_the_end() {
    let err = render_frame_at(&script(5, vec![]), FrameIndex(5)).unwrap_err();
    assert!(err.to_string().contains("outside duration"));
}

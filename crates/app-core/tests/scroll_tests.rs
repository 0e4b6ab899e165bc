// Host-side tests for the damped scroll source.

use app_core::ScrollState;

#[test]
fn target_is_clamped_to_unit_interval() {
    let mut s = ScrollState::new(4);
    s.set_target(1.7);
    for _ in 0..600 {
        s.advance(1.0 / 60.0);
    }
    assert!(s.offset() <= 1.0);
    assert!((s.offset() - 1.0).abs() < 1e-3);

    s.set_target(-0.5);
    for _ in 0..600 {
        s.advance(1.0 / 60.0);
    }
    assert!(s.offset() >= 0.0);
    assert!(s.offset() < 1e-3);
}

#[test]
fn damped_offset_converges_monotonically() {
    let mut s = ScrollState::new(4);
    s.set_target(0.8);
    let mut prev = s.offset();
    for _ in 0..240 {
        s.advance(1.0 / 60.0);
        let now = s.offset();
        assert!(now >= prev, "offset moved away from target");
        assert!(now <= 0.8 + 1e-6, "offset overshot target");
        prev = now;
    }
    assert!((prev - 0.8).abs() < 1e-3);
}

#[test]
fn jump_to_bypasses_damping() {
    let mut s = ScrollState::new(4);
    s.jump_to(0.6);
    assert!((s.offset() - 0.6).abs() < 1e-6);
}

#[test]
fn range_remaps_a_sub_span() {
    let mut s = ScrollState::new(4);
    s.jump_to(0.375);
    assert!((s.range(0.25, 0.25) - 0.5).abs() < 1e-5);
    assert_eq!(s.range(0.5, 0.25), 0.0);
    assert_eq!(s.range(0.0, 0.25), 1.0);
    // Degenerate span saturates instead of dividing by zero.
    assert_eq!(s.range(0.25, 0.0), 1.0);
    assert_eq!(s.range(0.5, 0.0), 0.0);
}

#[test]
fn current_section_rounds_to_nearest() {
    let mut s = ScrollState::new(4);
    for (offset, expected) in [
        (0.0, 0usize),
        (0.1, 0),
        (0.34, 1),
        (0.5, 2),
        (0.84, 3),
        (1.0, 3),
    ] {
        s.jump_to(offset);
        assert_eq!(s.current_section(), expected, "offset={offset}");
    }
}

#[test]
fn single_section_never_indexes_out_of_bounds() {
    let mut s = ScrollState::new(1);
    s.jump_to(1.0);
    assert_eq!(s.current_section(), 0);
}

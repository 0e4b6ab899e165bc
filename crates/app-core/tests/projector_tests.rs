// Host-side tests for the projector toggle state machine.

use app_core::{ProjectorState, BEAM_BASE_OPACITY, BEAM_FLICKER_SPAN, REEL_RATE};

#[test]
fn starts_on_and_not_hovered() {
    let p = ProjectorState::default();
    assert!(p.is_on());
    assert!(!p.hovered());
    assert_eq!(p.reel_angle(), 0.0);
}

#[test]
fn two_clicks_restore_the_original_state() {
    let mut p = ProjectorState::default();
    p.handle_click();
    assert!(!p.is_on());
    p.handle_click();
    assert!(p.is_on());
}

#[test]
fn hover_is_orthogonal_to_clicks() {
    let mut p = ProjectorState::default();
    p.set_hovered(true);
    p.handle_click();
    assert!(p.hovered(), "click must not clear hover");
    p.set_hovered(false);
    assert!(!p.hovered());
    assert!(!p.is_on(), "enter/leave must not toggle power");
}

#[test]
fn reels_advance_only_while_on() {
    let mut p = ProjectorState::default();
    p.advance_reels(0.5);
    let expected = -REEL_RATE * 0.5;
    assert!((p.reel_angle() - expected).abs() < 1e-6);

    p.handle_click();
    p.advance_reels(0.5);
    assert!((p.reel_angle() - expected).abs() < 1e-6, "reels moved while off");

    p.handle_click();
    p.advance_reels(0.25);
    assert!((p.reel_angle() - (expected - REEL_RATE * 0.25)).abs() < 1e-6);
}

#[test]
fn beam_flickers_within_its_band_while_on() {
    let p = ProjectorState::default();
    for step in 0..200 {
        let t = step as f32 * 0.01;
        let o = p.beam_opacity(t);
        assert!(o >= BEAM_BASE_OPACITY - BEAM_FLICKER_SPAN - 1e-6);
        assert!(o <= BEAM_BASE_OPACITY + BEAM_FLICKER_SPAN + 1e-6);
    }
}

#[test]
fn beam_is_forced_dark_while_off() {
    let mut p = ProjectorState::default();
    p.handle_click();
    for step in 0..200 {
        assert_eq!(p.beam_opacity(step as f32 * 0.01), 0.0);
    }
}

#[test]
fn emissive_and_hover_scale_follow_state() {
    let mut p = ProjectorState::default();
    let lit = p.emissive_level();
    p.handle_click();
    let dim = p.emissive_level();
    assert!(lit > dim);

    assert_eq!(p.hover_scale(), 1.0);
    p.set_hovered(true);
    assert!(p.hover_scale() > 1.0);
}

#[test]
fn negative_dt_does_not_rewind_the_reels() {
    let mut p = ProjectorState::default();
    p.advance_reels(0.5);
    let angle = p.reel_angle();
    p.advance_reels(-1.0);
    assert_eq!(p.reel_angle(), angle);
}

mod common;

use common::{deck_on, TestDeck, SETTLE_MS};
use heartdeck::config::Config;
use heartdeck::deck::{DeckEvent, Slide, SwipeDirection};

fn drag(deck: &mut TestDeck, from: f32, to: f32) {
    deck.handle(DeckEvent::TouchStart { x: from });
    deck.handle(DeckEvent::TouchMove { x: (from + to) / 2.0 });
    deck.handle(DeckEvent::TouchMove { x: to });
    deck.handle(DeckEvent::TouchEnd);
}

#[test]
fn forward_swipe_from_proposal_is_blocked() {
    let mut deck = deck_on(Slide::Proposal);
    deck.handle_swipe(160.0, 100.0);
    assert!(!deck.is_transitioning());
    deck.advance_by(SETTLE_MS);
    assert_eq!(deck.current_slide(), Slide::Proposal);
}

#[test]
fn leftward_drag_moves_forward() {
    let mut deck = deck_on(Slide::Letter);
    drag(&mut deck, 300.0, 200.0);
    deck.advance_by(SETTLE_MS);
    assert_eq!(deck.current_slide(), Slide::Gallery);
}

#[test]
fn rightward_drag_goes_back_like_the_back_button() {
    let mut deck = deck_on(Slide::Letter);
    drag(&mut deck, 100.0, 200.0);
    deck.advance_by(SETTLE_MS);
    assert_eq!(deck.current_slide(), Slide::Landing);
}

#[test]
fn short_drags_do_nothing() {
    let mut deck = deck_on(Slide::Gallery);
    drag(&mut deck, 100.0, 150.0);
    drag(&mut deck, 150.0, 100.0);
    assert!(!deck.is_transitioning());
}

#[test]
fn tap_without_movement_is_not_a_swipe() {
    let mut deck = deck_on(Slide::Gallery);
    deck.handle(DeckEvent::TouchStart { x: 500.0 });
    deck.handle(DeckEvent::TouchEnd);
    assert!(!deck.is_transitioning());
}

#[test]
fn each_touch_starts_a_fresh_gesture() {
    let mut deck = deck_on(Slide::Gallery);
    deck.handle(DeckEvent::TouchStart { x: 500.0 });
    deck.handle(DeckEvent::TouchMove { x: 100.0 });
    // Restarted before the end: the earlier move must not count.
    deck.handle(DeckEvent::TouchStart { x: 100.0 });
    deck.handle(DeckEvent::TouchEnd);
    assert!(!deck.is_transitioning());
}

#[test]
fn swipes_stop_at_the_ends_of_the_deck() {
    let mut deck = deck_on(Slide::Messages);
    deck.swipe(SwipeDirection::Forward);
    assert!(!deck.is_transitioning());

    let mut deck = deck_on(Slide::Landing);
    deck.swipe(SwipeDirection::Backward);
    assert!(!deck.is_transitioning());
}

#[test]
fn swipes_on_the_error_slide_are_ignored() {
    let mut deck = deck_on(Slide::Proposal);
    deck.start_loading_sequence();
    deck.advance_by(2_000);
    assert_eq!(deck.current_slide(), Slide::Error);

    drag(&mut deck, 400.0, 100.0);
    deck.handle(DeckEvent::Swipe(SwipeDirection::Backward));
    assert!(!deck.is_transitioning());
    assert_eq!(deck.current_slide(), Slide::Error);
}

#[test]
fn threshold_comes_from_config() {
    let mut config = Config::default();
    config.gesture.swipe_threshold_px = 200.0;
    let mut deck = common::deck_with(&config);
    common::settle_on(&mut deck, Slide::Letter);

    drag(&mut deck, 300.0, 200.0);
    assert!(!deck.is_transitioning());
    drag(&mut deck, 300.0, 50.0);
    assert!(deck.is_transitioning());
}

#[test]
fn swipe_respects_the_settle_window() {
    let mut deck = deck_on(Slide::Letter);
    deck.swipe(SwipeDirection::Forward);
    deck.swipe(SwipeDirection::Forward);
    deck.advance_by(SETTLE_MS);
    assert_eq!(deck.current_slide(), Slide::Gallery);
}

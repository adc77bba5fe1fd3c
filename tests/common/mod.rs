//! Shared helpers for driving a deck on the virtual clock.

#![allow(dead_code, unused_imports)]

use heartdeck::config::Config;
use heartdeck::deck::{
    DeckEvent, DeckSettings, RecordingSurface, Slide, SlideController, SurfaceCommand,
};

pub type TestDeck = SlideController<RecordingSurface>;

/// Settle window of the default timing.
pub const SETTLE_MS: u64 = 300;

pub fn deck() -> TestDeck {
    SlideController::new(DeckSettings::default(), RecordingSurface::new())
}

pub fn deck_with(config: &Config) -> TestDeck {
    SlideController::new(DeckSettings::from(config), RecordingSurface::new())
}

pub fn mounted_deck() -> TestDeck {
    let mut deck = deck();
    deck.handle(DeckEvent::Mount);
    deck
}

/// Navigate to `slide` and let the settle window run out.
pub fn settle_on(deck: &mut TestDeck, slide: Slide) {
    deck.navigate(slide);
    deck.advance_by(SETTLE_MS);
    assert_eq!(deck.current_slide(), slide, "failed to settle on {slide}");
}

/// A fresh deck already sitting on `slide`, with its command log cleared.
pub fn deck_on(slide: Slide) -> TestDeck {
    let mut deck = deck();
    if slide != Slide::Landing {
        settle_on(&mut deck, slide);
    }
    deck.surface_mut().take();
    deck
}

pub fn click(deck: &mut TestDeck, control: heartdeck::deck::Control) {
    deck.handle(DeckEvent::Click(control));
}

pub fn alerts(deck: &TestDeck) -> Vec<String> {
    deck.surface()
        .commands()
        .iter()
        .filter_map(|command| match command {
            SurfaceCommand::ShowAlert { title, .. } => Some(title.clone()),
            _ => None,
        })
        .collect()
}

pub fn yes_scales(deck: &TestDeck) -> Vec<f32> {
    deck.surface()
        .commands()
        .iter()
        .filter_map(|command| match command {
            SurfaceCommand::SetYesButtonScale(scale) => Some(*scale),
            _ => None,
        })
        .collect()
}

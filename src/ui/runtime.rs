use crate::config::Config;
use crate::deck::{DeckEvent, DeckSettings, SlideController};
use crate::shutdown::ShutdownHandle;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction, MouseTracker};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::DeckView;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Redraw at least this often so particles keep moving.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("input thread stopped unexpectedly")]
    InputClosed,
}

/// Run the deck in the current terminal until quit or shutdown.
///
/// The controller's clock is wall time since start, fed in on every pass.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> Result<(), RuntimeError> {
    let (mut terminal, guard) = setup_terminal()?;
    let size = terminal.size()?;
    let mut area = Rect::new(0, 0, size.width, size.height);

    let view = DeckView::new(config.particles.ambient_count, size.width, size.height);
    let mut deck = SlideController::new(DeckSettings::from(config), view);
    let mut mouse = MouseTracker::new(config.gesture.cell_width_px);
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    let started = Instant::now();

    deck.handle(DeckEvent::Mount);

    let result = loop {
        let now = elapsed_ms(started);
        deck.advance_to(now);
        deck.surface_mut().tick(now);
        terminal.draw(|frame| draw(frame, deck.surface(), &config.content))?;

        if shutdown.is_shutting_down() {
            break Ok(());
        }

        let wait = deck
            .next_deadline()
            .map(|due| Duration::from_millis(due.saturating_sub(now)))
            .unwrap_or(FRAME_INTERVAL)
            .min(FRAME_INTERVAL);

        match events.next(wait) {
            Ok(AppEvent::Key(key)) => match handle_key(key, deck.surface()) {
                InputAction::Quit => {
                    tracing::info!(slide = %deck.current_slide(), "Quit requested");
                    shutdown.signal();
                    break Ok(());
                }
                InputAction::Deck(event) => {
                    deck.advance_to(elapsed_ms(started));
                    deck.handle(event);
                }
                InputAction::None => {}
            },
            Ok(AppEvent::Mouse(event)) => {
                deck.advance_to(elapsed_ms(started));
                for event in mouse.on_mouse(event, area, deck.surface()) {
                    deck.handle(event);
                }
            }
            Ok(AppEvent::Resize(width, height)) => {
                area = Rect::new(0, 0, width, height);
                deck.handle(DeckEvent::Resize { width, height });
            }
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if shutdown.is_shutting_down() {
                    break Ok(());
                }
                break Err(RuntimeError::InputClosed);
            }
        }
    };

    drop(guard);
    result
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

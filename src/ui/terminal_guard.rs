//! Terminal mode for the deck.
//!
//! Mouse capture is what makes the deck usable without a touch screen:
//! drags with the left button are the swipes and presses are the button
//! taps. Without it the terminal would select text instead.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Restore = Box<dyn FnOnce() + Send + 'static>;
type SharedRestore = Arc<Mutex<Option<Restore>>>;

pub type DeckTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves deck mode exactly once, on drop or from the panic hook.
///
/// A panic mid-frame would otherwise leave the user's shell in raw mode
/// with mouse reports still arriving as garbage input.
pub struct TerminalGuard {
    restore: SharedRestore,
}

impl TerminalGuard {
    fn armed<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        }
    }

    fn hook_panics(&self) {
        let restore = Arc::clone(&self.restore);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&restore);
            previous(info);
        }));
    }

    fn release(&self) -> bool {
        run_once(&self.restore)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.release() {
            tracing::debug!("Left deck mode");
        }
    }
}

fn run_once(slot: &SharedRestore) -> bool {
    let restore = slot.lock().ok().and_then(|mut slot| slot.take());
    match restore {
        Some(restore) => {
            restore();
            true
        }
        None => false,
    }
}

fn enter_deck_mode(stdout: &mut Stdout) -> io::Result<()> {
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;
    Ok(())
}

/// Best effort: every step runs even if an earlier one failed.
fn leave_deck_mode() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
    let _ = disable_raw_mode();
}

/// Switch to the alternate screen with raw input and mouse reports on.
pub fn setup_terminal() -> io::Result<(DeckTerminal, TerminalGuard)> {
    let mut stdout = io::stdout();
    if let Err(err) = enter_deck_mode(&mut stdout) {
        leave_deck_mode();
        return Err(err);
    }

    let guard = TerminalGuard::armed(leave_deck_mode);
    guard.hook_panics();
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    tracing::debug!("Entered deck mode");
    Ok((terminal, guard))
}

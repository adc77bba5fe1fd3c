//! The slideshow core: slides, timers, the controller and the surface it
//! drives. Nothing in here knows about terminals.

mod controller;
mod event;
mod settings;
mod slide;
mod surface;
mod timer;

pub use controller::{Alert, SlideController};
pub use event::{Control, DeckEvent, SwipeDirection};
pub use settings::DeckSettings;
pub use slide::Slide;
pub use surface::{PresentationSurface, RecordingSurface, SurfaceCommand};
pub use timer::TimerQueue;

/// Clickable (or tappable) controls on the slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Landing: start the deck.
    Begin,
    /// Proposal: accept.
    Yes,
    /// Proposal: refuse.
    No,
    /// Error: reset the refusals and return to the proposal.
    GoBack,
    /// Letter: on to the gallery.
    ContinueToGallery,
    /// Gallery: on to the messages.
    ContinueToMessages,
    /// Progress dot for the slide at this index.
    Dot(usize),
    /// Header back arrow.
    BackButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: next slide.
    Forward,
    /// Finger moved right: previous slide.
    Backward,
}

/// Everything the input layer can tell the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckEvent {
    /// Deck became visible. Only the first one counts.
    Mount,
    Click(Control),
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    /// Swipe already recognised by the input layer (arrow keys).
    Swipe(SwipeDirection),
    Resize { width: u16, height: u16 },
}

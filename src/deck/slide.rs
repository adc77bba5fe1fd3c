//! The six slides of the deck and the index arithmetic around them.

use std::fmt;

/// One full-screen content state.
///
/// Discriminants are the slide indices used by dots, progress and swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slide {
    #[default]
    Landing = 0,
    Proposal = 1,
    /// Only reachable through the loading sequence, never by navigation.
    Error = 2,
    Letter = 3,
    Gallery = 4,
    Messages = 5,
}

impl Slide {
    pub const COUNT: usize = 6;

    pub const ALL: [Slide; Slide::COUNT] = [
        Slide::Landing,
        Slide::Proposal,
        Slide::Error,
        Slide::Letter,
        Slide::Gallery,
        Slide::Messages,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Slide> {
        Self::ALL.get(index).copied()
    }

    /// The slide one index further, if any.
    pub fn next(self) -> Option<Slide> {
        Self::from_index(self.index() + 1)
    }

    /// The slide one index back, if any.
    pub fn previous(self) -> Option<Slide> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Where the back action leads from this slide.
    ///
    /// Letter jumps straight to Landing so that a decrement never lands on
    /// Error.
    pub fn back_target(self) -> Option<Slide> {
        match self {
            Slide::Letter => Some(Slide::Landing),
            other => other.previous(),
        }
    }

    /// Whether `navigate` may target this slide directly.
    pub fn is_navigable(self) -> bool {
        self != Slide::Error
    }

    /// Deck progress shown in the header: `(index + 1) / 6 * 100`.
    pub fn progress_percent(self) -> f32 {
        (self.index() as f32 + 1.0) / Self::COUNT as f32 * 100.0
    }

    pub fn shows_back_button(self) -> bool {
        self != Slide::Landing && self != Slide::Error
    }

    pub fn label(self) -> &'static str {
        match self {
            Slide::Landing => "Landing",
            Slide::Proposal => "Proposal",
            Slide::Error => "Error",
            Slide::Letter => "Letter",
            Slide::Gallery => "Gallery",
            Slide::Messages => "Messages",
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip_through_all() {
        for (idx, slide) in Slide::ALL.iter().enumerate() {
            assert_eq!(slide.index(), idx);
            assert_eq!(Slide::from_index(idx), Some(*slide));
        }
        assert_eq!(Slide::from_index(6), None);
    }

    #[test]
    fn back_target_skips_error_from_letter() {
        assert_eq!(Slide::Letter.back_target(), Some(Slide::Landing));
        assert_eq!(Slide::Gallery.back_target(), Some(Slide::Letter));
        assert_eq!(Slide::Proposal.back_target(), Some(Slide::Landing));
        assert_eq!(Slide::Landing.back_target(), None);
    }

    #[test]
    fn next_stops_at_messages() {
        assert_eq!(Slide::Gallery.next(), Some(Slide::Messages));
        assert_eq!(Slide::Messages.next(), None);
    }

    #[test]
    fn progress_is_proportional_to_position() {
        assert!((Slide::Landing.progress_percent() - 16.666_666).abs() < 0.001);
        assert!((Slide::Error.progress_percent() - 50.0).abs() < 0.001);
        assert!((Slide::Messages.progress_percent() - 100.0).abs() < 0.001);
    }

    #[test]
    fn back_button_hidden_on_landing_and_error() {
        let visible: Vec<bool> = Slide::ALL.iter().map(|s| s.shows_back_button()).collect();
        assert_eq!(visible, vec![false, true, false, true, true, true]);
    }
}

use crate::deck::{Control, DeckEvent, Slide, SwipeDirection};
use crate::ui::layout::control_at;
use crate::ui::view::DeckView;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Key means nothing on the current screen.
    None,
    Quit,
    Deck(DeckEvent),
}

pub fn handle_key(key: KeyEvent, view: &DeckView) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return InputAction::Quit;
    }

    // The loading overlay covers the whole deck.
    if view.loading().is_some() {
        return InputAction::None;
    }

    let slide = view.slide();
    let control = match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => primary_control(slide),
        KeyCode::Char('y') if slide == Slide::Proposal => Some(Control::Yes),
        KeyCode::Char('n') if slide == Slide::Proposal => Some(Control::No),
        KeyCode::Char('g') if slide == Slide::Error => Some(Control::GoBack),
        KeyCode::Backspace | KeyCode::Char('b') if view.back_visible() => {
            Some(Control::BackButton)
        }
        KeyCode::Char(ch) => ch
            .to_digit(10)
            .map(|digit| digit as usize)
            .filter(|digit| (1..=Slide::COUNT).contains(digit))
            .map(|digit| Control::Dot(digit - 1)),
        KeyCode::Left => return InputAction::Deck(DeckEvent::Swipe(SwipeDirection::Backward)),
        KeyCode::Right => return InputAction::Deck(DeckEvent::Swipe(SwipeDirection::Forward)),
        _ => None,
    };

    control
        .map(|control| InputAction::Deck(DeckEvent::Click(control)))
        .unwrap_or(InputAction::None)
}

/// Control behind Enter/Space on each slide.
fn primary_control(slide: Slide) -> Option<Control> {
    match slide {
        Slide::Landing => Some(Control::Begin),
        Slide::Proposal => Some(Control::Yes),
        Slide::Error => Some(Control::GoBack),
        Slide::Letter => Some(Control::ContinueToGallery),
        Slide::Gallery => Some(Control::ContinueToMessages),
        Slide::Messages => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Turns left-button mouse traffic into touch events and clicks.
///
/// Columns become pixels through `cell_width_px` so the swipe threshold
/// keeps its meaning. A press released over the same control without any
/// drag also counts as a click on it.
#[derive(Debug, Clone)]
pub struct MouseTracker {
    cell_width_px: f32,
    pressed: Option<Control>,
    press_column: u16,
    dragged: bool,
}

impl MouseTracker {
    pub fn new(cell_width_px: f32) -> Self {
        Self {
            cell_width_px,
            pressed: None,
            press_column: 0,
            dragged: false,
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent, area: Rect, view: &DeckView) -> Vec<DeckEvent> {
        let x = f32::from(mouse.column) * self.cell_width_px;
        let hit = || {
            control_at(
                area,
                view.slide(),
                view.yes_scale(),
                view.back_visible(),
                mouse.column,
                mouse.row,
            )
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if view.loading().is_some() {
                    self.pressed = None;
                    return Vec::new();
                }
                self.pressed = hit();
                self.press_column = mouse.column;
                self.dragged = false;
                vec![DeckEvent::TouchStart { x }]
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if mouse.column != self.press_column {
                    self.dragged = true;
                }
                vec![DeckEvent::TouchMove { x }]
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let mut events = vec![DeckEvent::TouchEnd];
                let pressed = self.pressed.take();
                if !self.dragged && view.loading().is_none() {
                    if let Some(control) = pressed.filter(|control| hit() == Some(*control)) {
                        events.push(DeckEvent::Click(control));
                    }
                }
                self.dragged = false;
                events
            }
            _ => Vec::new(),
        }
    }
}

use crate::deck::Slide;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the slide on screen, version on the right.
pub struct Footer {
    slide: Slide,
}

impl Footer {
    pub fn new(slide: Slide) -> Self {
        Self { slide }
    }

    fn hints(&self) -> &'static str {
        match self.slide {
            Slide::Landing => " Enter: Begin │ →: Swipe │ 1-6: Jump │ Q: Quit",
            Slide::Proposal => " Y: Yes │ N: No │ ←/→: Swipe │ B: Back │ Q: Quit",
            Slide::Error => " G/Enter: Go back │ Q: Quit",
            Slide::Letter | Slide::Gallery => {
                " Enter: Continue │ ←/→: Swipe │ B: Back │ 1-6: Jump │ Q: Quit"
            }
            Slide::Messages => " ←: Swipe │ B: Back │ 1-6: Jump │ Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{VERSION} ");

        // Pad by char count so the box-drawing separators line up
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

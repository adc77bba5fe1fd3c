use crate::deck::Slide;
use crate::ui::layout::{back_button_rect, back_label, dot_rects};
use crate::ui::theme::{GAUGE_TRACK, HEADER_TEXT, MUTED_TEXT, ROSE};
use crate::ui::view::DeckView;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph, Widget};

/// Three rows: back button and slide name, deck progress, slide dots.
pub struct Header<'a> {
    view: &'a DeckView,
}

impl<'a> Header<'a> {
    pub fn new(view: &'a DeckView) -> Self {
        Self { view }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let row = |offset: u16| Rect {
            y: area.y + offset.min(area.height - 1),
            height: 1,
            ..area
        };

        Paragraph::new(Line::from(Span::styled(
            self.view.slide().label(),
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .render(row(0), buf);

        if self.view.back_visible() {
            Paragraph::new(Span::styled(back_label(), Style::default().fg(HEADER_TEXT)))
                .render(back_button_rect(area), buf);
        }

        if area.height >= 3 {
            let gauge_area = Rect {
                x: area.x + 2,
                width: area.width.saturating_sub(4),
                ..row(1)
            };
            LineGauge::default()
                .ratio(f64::from(self.view.progress_percent()) / 100.0)
                .filled_style(Style::default().fg(ROSE))
                .unfilled_style(Style::default().fg(GAUGE_TRACK))
                .label("")
                .render(gauge_area, buf);
        }

        for (idx, rect) in dot_rects(area).into_iter().enumerate() {
            let active = Slide::from_index(idx) == Some(self.view.slide());
            let (symbol, style) = if active {
                ("●", Style::default().fg(ROSE).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_TEXT))
            };
            Paragraph::new(Span::styled(symbol, style)).render(rect, buf);
        }
    }
}

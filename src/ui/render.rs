use crate::config::ContentConfig;
use crate::deck::{Control, Slide};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    body_sections, centered_rect_by_size, layout_regions, place_buttons, slide_buttons, Button,
};
use crate::ui::theme::{
    DEEP_ROSE, GAUGE_TRACK, HEADER_TEXT, MOTE_BRIGHT, MOTE_DIM, MUTED_TEXT, POPUP_BORDER, ROSE,
    STATUS_ERROR,
};
use crate::ui::view::{AlertView, DeckView, LoadingView};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, view: &DeckView, content: &ContentConfig) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(view), header);

    let (text_area, button_row) = body_sections(body);
    frame.render_widget(slide_text(view.slide(), content, text_area), text_area);
    for (button, rect) in place_buttons(button_row, &slide_buttons(view.slide(), view.yes_scale()))
    {
        frame.render_widget(button_widget(button), rect);
    }

    frame.render_widget(Footer::new(view.slide()).widget(footer), footer);

    draw_particles(frame.buffer_mut(), area, body, view);

    if let Some(alert) = view.alert() {
        draw_alert(frame, body, alert);
    }
    if let Some(loading) = view.loading() {
        draw_loading(frame, area, loading, content);
    }
}

fn slide_text(slide: Slide, content: &ContentConfig, area: Rect) -> Paragraph<'static> {
    let title = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        ))
    };
    let muted = |text: String| Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)));
    let plain = |text: String| Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT)));
    let italic = |text: String| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::ITALIC),
        ))
    };

    let mut lines: Vec<Line<'static>> = match slide {
        Slide::Landing => vec![
            title("Happy Valentine's Day"),
            Line::from(""),
            italic(content.recipient.clone()),
            Line::from(""),
            muted(format!("With all my love, {}", content.sender)),
        ],
        Slide::Proposal => vec![
            title(&content.question),
            Line::from(""),
            muted("Choose what your heart tells you".to_string()),
        ],
        Slide::Error => vec![
            Line::from(Span::styled(
                "Error Detected",
                Style::default()
                    .fg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            plain("Wrong decision made".to_string()),
            Line::from(""),
            muted("That answer could not be processed.".to_string()),
            muted("Please go back and reconsider.".to_string()),
        ],
        Slide::Letter => {
            let mut lines = vec![
                title("For You"),
                Line::from(""),
                italic(format!("My Dearest {},", content.recipient)),
                Line::from(""),
            ];
            for paragraph in &content.letter {
                lines.push(plain(paragraph.clone()));
                lines.push(Line::from(""));
            }
            lines.push(muted("With all my heart,".to_string()));
            lines.push(italic(content.sender.clone()));
            lines
        }
        Slide::Gallery => {
            let mut lines = vec![
                title("Our Creative Journey"),
                muted("Moments captured in art".to_string()),
                Line::from(""),
            ];
            for row in content.gallery.chunks(3) {
                let captions: Vec<String> = row.iter().map(|c| format!("✿ {c}")).collect();
                lines.push(plain(captions.join("     ")));
                lines.push(Line::from(""));
            }
            lines
        }
        Slide::Messages => {
            let mut lines = vec![title("What You Mean to Me"), Line::from("")];
            for message in &content.messages {
                lines.push(italic(format!("“{message}”")));
            }
            lines.push(Line::from(""));
            lines.push(muted(format!("Forever yours, {}", content.sender)));
            lines
        }
    };

    // Rough vertical centring; wrapping may push long slides past it.
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded = vec![Line::from(""); top as usize];
    padded.append(&mut lines);

    Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn button_widget(button: Button) -> Paragraph<'static> {
    let style = match button.control {
        Control::No => Style::default().fg(MUTED_TEXT),
        Control::Yes => Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(ROSE),
    };
    Paragraph::new(Span::styled(button.label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        )
}

/// Motes only land on blank body cells; hearts fly over everything
/// except overlays.
fn draw_particles(buf: &mut Buffer, area: Rect, body: Rect, view: &DeckView) {
    for (x, y, bright) in view.particles().motes() {
        let position = Position::new(area.x + x, area.y + y);
        if !body.contains(position) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(position) {
            if cell.symbol() == " " {
                let color = if bright { MOTE_BRIGHT } else { MOTE_DIM };
                cell.set_char('·').set_fg(color);
            }
        }
    }

    for heart in view.particles().hearts() {
        let position = Position::new(area.x + heart.x, area.y + heart.y);
        if !area.contains(position) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(position) {
            let color = if heart.fade > 0.5 { ROSE } else { DEEP_ROSE };
            cell.set_char(heart.glyph).set_fg(color);
        }
    }
}

fn draw_alert(frame: &mut Frame<'_>, body: Rect, alert: &AlertView) {
    let lines = vec![
        Line::from(Span::styled(
            alert.title.clone(),
            Style::default().fg(ROSE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup = centered_rect_by_size(
        body,
        content_width.saturating_add(6),
        lines.len() as u16 + 2,
    );

    frame.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(widget, popup);
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, loading: LoadingView, content: &ContentConfig) {
    frame.render_widget(Clear, area);

    let panel = centered_rect_by_size(area, 52, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let row = |offset: u16| Rect {
        y: inner.y + offset,
        height: 1,
        ..inner
    };
    if inner.height < 5 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            content.loading_message.clone(),
            Style::default().fg(HEADER_TEXT),
        ))
        .alignment(Alignment::Center),
        row(0),
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(ROSE).bg(GAUGE_TRACK))
            .percent(u16::from(loading.progress.min(100))),
        row(2),
    );
    if loading.error_visible {
        frame.render_widget(
            Paragraph::new(Span::styled(
                content.loading_error.clone(),
                Style::default()
                    .fg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            row(4),
        );
    }
}

use crate::deck::{Control, Slide};
use ratatui::layout::{Position, Rect};

/// Base width of the yes button before scaling.
const YES_BASE_WIDTH: u16 = 9;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 4;
const BACK_LABEL: &str = "← Back";

/// A clickable button as drawn on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub control: Control,
    pub label: &'static str,
    pub width: u16,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of `width` x `height` centred in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Buttons shown on `slide`, left to right.
pub fn slide_buttons(slide: Slide, yes_scale: f32) -> Vec<Button> {
    match slide {
        Slide::Landing => vec![button(Control::Begin, "BEGIN", 11)],
        Slide::Proposal => {
            let yes_width = (f32::from(YES_BASE_WIDTH) * yes_scale.max(1.0)).round() as u16;
            vec![
                button(Control::Yes, "YES", yes_width),
                button(Control::No, "NO", 8),
            ]
        }
        Slide::Error => vec![button(Control::GoBack, "GO BACK", 13)],
        Slide::Letter => vec![button(Control::ContinueToGallery, "CONTINUE →", 16)],
        Slide::Gallery => vec![button(Control::ContinueToMessages, "CONTINUE →", 16)],
        Slide::Messages => Vec::new(),
    }
}

fn button(control: Control, label: &'static str, width: u16) -> Button {
    Button {
        control,
        label,
        width,
    }
}

/// Split the slide body into the text area and the button row.
pub fn body_sections(body: Rect) -> (Rect, Rect) {
    let row_height = BUTTON_HEIGHT.min(body.height);
    let text = Rect {
        height: body.height.saturating_sub(row_height + 1),
        ..body
    };
    let row = Rect {
        x: body.x,
        y: body.y + body.height.saturating_sub(row_height + 1),
        width: body.width,
        height: row_height,
    };
    (text, row)
}

/// Place `buttons` centred in `row`, clipped to the row.
pub fn place_buttons(row: Rect, buttons: &[Button]) -> Vec<(Button, Rect)> {
    let total = buttons
        .iter()
        .map(|b| b.width)
        .fold(0u16, |acc, width| acc.saturating_add(width))
        .saturating_add(BUTTON_GAP.saturating_mul(buttons.len().saturating_sub(1) as u16));
    let mut x = row.x + row.width.saturating_sub(total) / 2;
    let right = row.x + row.width;

    let mut placed = Vec::with_capacity(buttons.len());
    for button in buttons {
        if x >= right {
            break;
        }
        let width = button.width.min(right - x);
        placed.push((
            *button,
            Rect {
                x,
                y: row.y,
                width,
                height: row.height,
            },
        ));
        x = x.saturating_add(button.width).saturating_add(BUTTON_GAP);
    }
    placed
}

/// Rect of the back button inside the header, when shown.
pub fn back_button_rect(header: Rect) -> Rect {
    Rect {
        x: header.x + 1,
        y: header.y,
        width: (BACK_LABEL.chars().count() as u16).min(header.width.saturating_sub(1)),
        height: header.height.min(1),
    }
}

pub fn back_label() -> &'static str {
    BACK_LABEL
}

/// One rect per progress dot on the last header row.
pub fn dot_rects(header: Rect) -> Vec<Rect> {
    if header.height == 0 {
        return Vec::new();
    }
    let span = Slide::COUNT as u16 * 2;
    let start = header.x + header.width.saturating_sub(span) / 2;
    let y = header.y + header.height - 1;
    (0..Slide::COUNT as u16)
        .map(|i| Rect {
            x: start + i * 2,
            y,
            width: 1,
            height: 1,
        })
        .filter(|rect| rect.x < header.x + header.width)
        .collect()
}

/// Every clickable region for the given screen state.
pub fn control_regions(
    area: Rect,
    slide: Slide,
    yes_scale: f32,
    back_visible: bool,
) -> Vec<(Control, Rect)> {
    let (header, body, _) = layout_regions(area);
    let (_, row) = body_sections(body);

    let mut regions: Vec<(Control, Rect)> = place_buttons(row, &slide_buttons(slide, yes_scale))
        .into_iter()
        .map(|(button, rect)| (button.control, rect))
        .collect();
    regions.extend(
        dot_rects(header)
            .into_iter()
            .enumerate()
            .map(|(idx, rect)| (Control::Dot(idx), rect)),
    );
    if back_visible {
        regions.push((Control::BackButton, back_button_rect(header)));
    }
    regions
}

/// Control under the cell `(column, row)`, if any.
pub fn control_at(
    area: Rect,
    slide: Slide,
    yes_scale: f32,
    back_visible: bool,
    column: u16,
    row: u16,
) -> Option<Control> {
    let position = Position::new(column, row);
    control_regions(area, slide, yes_scale, back_visible)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(control, _)| control)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn regions_cover_whole_area() {
        let (header, body, footer) = layout_regions(screen());
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 20, 10), 30, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }

    #[test]
    fn yes_button_grows_with_scale() {
        let small = slide_buttons(Slide::Proposal, 1.0)[0].width;
        let large = slide_buttons(Slide::Proposal, 3.0)[0].width;
        assert_eq!(small, 9);
        assert_eq!(large, 27);
    }

    #[test]
    fn click_on_begin_button_is_found() {
        let regions = control_regions(screen(), Slide::Landing, 1.0, false);
        let (_, rect) = regions
            .iter()
            .find(|(control, _)| *control == Control::Begin)
            .copied()
            .unwrap();
        assert_eq!(
            control_at(screen(), Slide::Landing, 1.0, false, rect.x + 1, rect.y + 1),
            Some(Control::Begin)
        );
    }

    #[test]
    fn dots_map_to_slide_indices() {
        let (header, _, _) = layout_regions(screen());
        let dots = dot_rects(header);
        assert_eq!(dots.len(), Slide::COUNT);
        assert_eq!(
            control_at(screen(), Slide::Letter, 1.0, true, dots[4].x, dots[4].y),
            Some(Control::Dot(4))
        );
    }

    #[test]
    fn back_button_only_when_visible() {
        let rect = back_button_rect(layout_regions(screen()).0);
        assert_eq!(
            control_at(screen(), Slide::Gallery, 1.0, false, rect.x, rect.y),
            None
        );
        assert_eq!(
            control_at(screen(), Slide::Gallery, 1.0, true, rect.x, rect.y),
            Some(Control::BackButton)
        );
    }

    #[test]
    fn huge_yes_scale_is_clipped_to_the_row() {
        let regions = control_regions(screen(), Slide::Proposal, 10_000.0, true);
        let yes = regions
            .iter()
            .find(|(control, _)| *control == Control::Yes)
            .map(|(_, rect)| *rect)
            .unwrap();
        assert!(yes.right() <= screen().right());
        assert_eq!(
            place_buttons(screen(), &slide_buttons(Slide::Proposal, f32::MAX)).len(),
            1
        );
    }

    #[test]
    fn messages_slide_has_no_buttons() {
        assert!(slide_buttons(Slide::Messages, 1.0).is_empty());
    }
}

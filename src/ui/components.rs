//! Overlay geometry for the terminal preview
//!
//! The overlay sits one cell away from the trigger on the configured side, leaving
//! room for the arrow, centred on the trigger along the other axis and clamped into
//! the stage.

use ratatui::layout::Rect;

use crate::tooltip::Position;

/// Terminal cells per CSS pixel, roughly one cell per 8px
const PX_PER_CELL: f32 = 8.0;

/// Arrow glyph pointing from the overlay back at the trigger
pub fn arrow_glyph(position: Position) -> &'static str {
    match position {
        Position::Bottom => "▲",
        Position::Top => "▼",
        Position::Left => "▶",
        Position::Right => "◀",
    }
}

/// Convert a CSS length to terminal columns. Percentages and unknown units yield `None`.
pub fn min_width_cells(width: &str) -> Option<u16> {
    let width = width.trim();
    let split = width
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(width.len());
    let (number, unit) = width.split_at(split);
    let value: f32 = number.parse().ok()?;

    let cells = match unit.trim() {
        "" | "px" => value / PX_PER_CELL,
        "em" | "rem" => value * 2.0,
        "ch" => value,
        _ => return None,
    };
    Some(cells.ceil().clamp(0.0, u16::MAX as f32) as u16)
}

/// Place an overlay of `size` (width, height) next to `trigger`, kept inside `bounds`
pub fn overlay_rect(trigger: Rect, size: (u16, u16), position: Position, bounds: Rect) -> Rect {
    let width = size.0.min(bounds.width);
    let height = size.1.min(bounds.height);
    let (w, h) = (width as i32, height as i32);

    let center_x = trigger.x as i32 + trigger.width as i32 / 2;
    let center_y = trigger.y as i32 + trigger.height as i32 / 2;

    let (x, y) = match position {
        Position::Bottom => (center_x - w / 2, trigger.bottom() as i32 + 1),
        Position::Top => (center_x - w / 2, trigger.y as i32 - 1 - h),
        Position::Left => (trigger.x as i32 - 1 - w, center_y - h / 2),
        Position::Right => (trigger.right() as i32 + 1, center_y - h / 2),
    };

    Rect::new(
        clamp_axis(x, w, bounds.x, bounds.width),
        clamp_axis(y, h, bounds.y, bounds.height),
        width,
        height,
    )
}

/// Cell for the arrow between trigger and overlay, if it falls inside `bounds`
pub(super) fn arrow_cell(trigger: Rect, position: Position, bounds: Rect) -> Option<(u16, u16)> {
    let center_x = trigger.x as i32 + trigger.width as i32 / 2;
    let center_y = trigger.y as i32 + trigger.height as i32 / 2;

    let (x, y) = match position {
        Position::Bottom => (center_x, trigger.bottom() as i32),
        Position::Top => (center_x, trigger.y as i32 - 1),
        Position::Left => (trigger.x as i32 - 1, center_y),
        Position::Right => (trigger.right() as i32, center_y),
    };

    let inside_x = x >= bounds.x as i32 && x < bounds.right() as i32;
    let inside_y = y >= bounds.y as i32 && y < bounds.bottom() as i32;
    (inside_x && inside_y).then_some((x as u16, y as u16))
}

fn clamp_axis(start: i32, len: i32, min: u16, span: u16) -> u16 {
    let max = (min as i32 + span as i32 - len).max(min as i32);
    start.clamp(min as i32, max) as u16
}

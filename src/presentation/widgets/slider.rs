use std::cmp::Ordering;

use ratatui::prelude::*;
use ratatui::widgets::Widget;

const THUMB: &str = "●";
const FILLED: &str = "━";
const TRACK: &str = "─";

/// Single-line range slider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderWidget {
    ratio: f64,
    track_style: Style,
    filled_style: Style,
    thumb_style: Style,
}

impl SliderWidget {
    /// `ratio` is the thumb position, `0.0` at the left end.
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: if ratio.is_nan() {
                0.0
            } else {
                ratio.clamp(0.0, 1.0)
            },
            ..Self::default()
        }
    }

    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }

    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled_style = style;
        self
    }

    pub fn thumb_style(mut self, style: Style) -> Self {
        self.thumb_style = style;
        self
    }
}

/// Column of the thumb within a track of `width` cells.
pub fn thumb_offset(ratio: f64, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    (ratio * f64::from(width - 1)).round() as u16
}

/// Track position under `column`, or `None` when it lies outside `area`.
pub fn ratio_at(area: Rect, column: u16) -> Option<f64> {
    if area.width == 0 || column < area.x || column >= area.right() {
        return None;
    }
    if area.width == 1 {
        return Some(0.0);
    }
    Some(f64::from(column - area.x) / f64::from(area.width - 1))
}

impl Widget for SliderWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() {
            return;
        }

        let thumb = thumb_offset(self.ratio, area.width);
        for offset in 0..area.width {
            let (symbol, style) = match offset.cmp(&thumb) {
                Ordering::Less => (FILLED, self.filled_style),
                Ordering::Equal => (THUMB, self.thumb_style),
                Ordering::Greater => (TRACK, self.track_style),
            };
            if let Some(cell) = buf.cell_mut((area.x + offset, area.y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};
use tui_textarea::TextArea;

use crate::{
    domain::sats::format_sats,
    model::channel_size::ChannelSizePicker,
    presentation::{config::Styles, widgets::slider::SliderWidget},
};

pub const LABEL: &str = "Channel Size (satoshis):";
/// Width of the bordered text field, enough for `16,777,216` plus padding.
pub const FIELD_WIDTH: u16 = 18;
/// Rows the widget occupies.
pub const HEIGHT: u16 = 6;

/// Which input surface receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    TextField,
    Slider,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::TextField => Focus::Slider,
            Focus::Slider => Focus::TextField,
        }
    }
}

/// Areas of the widget, shared by rendering and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSizeLayout {
    pub label: Rect,
    pub field: Rect,
    pub units: Rect,
    pub slider: Rect,
    pub scale: Rect,
}

impl ChannelSizeLayout {
    pub fn new(area: Rect) -> Self {
        let [label, field_row, slider, scale] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [field, _, units] = Layout::horizontal([
            Constraint::Length(FIELD_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(field_row);
        // Units line up with the text inside the field border
        let units = Rect {
            y: units.y.saturating_add(1),
            height: units.height.saturating_sub(1).min(1),
            ..units
        };

        Self {
            label,
            field,
            units,
            slider,
            scale,
        }
    }
}

/// Renders the label, text field, BTC equivalent, slider and scale.
pub struct ChannelSizeWidget<'a> {
    picker: &'a ChannelSizePicker,
    textarea: &'a TextArea<'a>,
    focus: Focus,
    styles: &'a Styles,
}

impl<'a> ChannelSizeWidget<'a> {
    pub fn new(
        picker: &'a ChannelSizePicker,
        textarea: &'a TextArea<'a>,
        focus: Focus,
        styles: &'a Styles,
    ) -> Self {
        Self {
            picker,
            textarea,
            focus,
            styles,
        }
    }

    fn style(&self, element: &str) -> Style {
        let style = self.styles.style(element);
        if self.picker.is_disabled() {
            style.patch(self.styles.style("disabled"))
        } else {
            style
        }
    }

    fn scale_line(&self, width: u16) -> Line<'static> {
        let range = self.picker.range();
        let min = format_sats(range.min_sats());
        let max = format_sats(range.max_sats());
        let gap = usize::from(width).saturating_sub(min.chars().count() + max.chars().count());
        Line::from(format!("{min}{}{max}", " ".repeat(gap.max(1))))
    }
}

impl Widget for ChannelSizeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = ChannelSizeLayout::new(area);

        Paragraph::new(LABEL)
            .style(self.style("label"))
            .render(layout.label, buf);

        self.textarea.render(layout.field, buf);

        Paragraph::new(self.picker.btc_label())
            .style(self.style("units"))
            .render(layout.units, buf);

        let mut thumb_style = self.style("thumb");
        if self.focus == Focus::Slider && !self.picker.is_disabled() {
            thumb_style = thumb_style.patch(self.styles.style("focused"));
        }
        SliderWidget::new(self.picker.range().ratio_of(self.picker.displayed()))
            .track_style(self.style("track"))
            .filled_style(self.style("track_filled"))
            .thumb_style(thumb_style)
            .render(layout.slider, buf);

        Paragraph::new(self.scale_line(layout.scale.width))
            .style(self.style("scale"))
            .render(layout.scale, buf);
    }
}

//! Channel size component
//!
//! Translates terminal input into picker messages and keeps the text field
//! showing the picker's displayed value.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    model::channel_size::{ChannelSizePicker, Message},
    presentation::{
        config::Styles,
        widgets::{
            channel_size::{ChannelSizeLayout, ChannelSizeWidget, Focus},
            slider::ratio_at,
        },
    },
};

/// Slider positions moved by PageUp/PageDown.
const PAGE_STEPS: i64 = 10;

/// Channel size component
///
/// Owns the editing buffer of the text field and the focus. The picker stays
/// the source of truth: after every update the owner calls
/// [`ChannelSizeComponent::sync`] so the field shows the accepted value.
#[derive(Debug)]
pub struct ChannelSizeComponent<'a> {
    textarea: TextArea<'a>,
    focus: Focus,
    /// Area of the last render, used for mouse hit testing
    area: Rect,
    dragging: bool,
}

impl<'a> ChannelSizeComponent<'a> {
    pub fn new(picker: &ChannelSizePicker) -> Self {
        let mut component = Self {
            textarea: TextArea::default(),
            focus: Focus::default(),
            area: Rect::default(),
            dragging: false,
        };
        component.sync(picker);
        component
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Current content of the text field
    pub fn text(&self) -> String {
        self.textarea.lines().concat()
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Reset the text field to the picker's displayed value.
    pub fn sync(&mut self, picker: &ChannelSizePicker) {
        let value = picker.text_value();
        if self.text() == value {
            return;
        }
        self.textarea = TextArea::new(vec![value]);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Process a key press on the focused surface.
    pub fn handle_key(&mut self, key: KeyEvent, picker: &ChannelSizePicker) -> Option<Message> {
        if picker.is_disabled() {
            return None;
        }

        match self.focus {
            Focus::TextField => self.edit(|textarea| {
                textarea.input(key);
            }),
            Focus::Slider => Self::slide(key, picker),
        }
    }

    /// Insert pasted text into the text field.
    pub fn handle_paste(&mut self, text: &str, picker: &ChannelSizePicker) -> Option<Message> {
        if picker.is_disabled() || self.focus != Focus::TextField {
            return None;
        }

        self.edit(|textarea| {
            textarea.insert_str(text);
        })
    }

    /// Process a mouse event against the last rendered layout.
    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        picker: &ChannelSizePicker,
    ) -> Option<Message> {
        if picker.is_disabled() {
            self.dragging = false;
            return None;
        }

        let layout = ChannelSizeLayout::new(self.area);
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if layout.field.contains(position) => {
                self.focus = Focus::TextField;
                None
            }
            MouseEventKind::Down(MouseButton::Left) if layout.slider.contains(position) => {
                self.focus = Focus::Slider;
                self.dragging = true;
                Self::slider_message(layout.slider, mouse.column, picker)
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                let column = mouse.column.clamp(
                    layout.slider.left(),
                    layout.slider.right().saturating_sub(1),
                );
                Self::slider_message(layout.slider, column, picker)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = false;
                None
            }
            _ => None,
        }
    }

    /// Render the component
    pub fn view(
        &mut self,
        picker: &ChannelSizePicker,
        styles: &Styles,
        frame: &mut Frame,
        area: Rect,
    ) {
        self.area = area;
        self.prepare_text_field(picker, styles);
        let widget = ChannelSizeWidget::new(picker, &self.textarea, self.focus, styles);
        frame.render_widget(widget, area);
    }

    fn prepare_text_field(&mut self, picker: &ChannelSizePicker, styles: &Styles) {
        let disabled = picker.is_disabled();
        let focused = self.focus == Focus::TextField && !disabled;

        let mut value_style = styles.style("value");
        let mut border_style = if focused {
            styles.style("focused")
        } else {
            Style::default()
        };
        if disabled {
            value_style = value_style.patch(styles.style("disabled"));
            border_style = border_style.patch(styles.style("disabled"));
        }

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        self.textarea.set_style(value_style);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            value_style
        });
    }

    fn edit(&mut self, apply: impl FnOnce(&mut TextArea<'a>)) -> Option<Message> {
        let before = self.text();
        apply(&mut self.textarea);
        let after = self.text();

        (before != after).then_some(Message::TextChanged { text: after })
    }

    fn slide(key: KeyEvent, picker: &ChannelSizePicker) -> Option<Message> {
        let range = picker.range();
        let current = picker.displayed();
        let value = match key.code {
            KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('j') => {
                range.step_by(current, -1)
            }
            KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('k') => {
                range.step_by(current, 1)
            }
            KeyCode::PageDown => range.step_by(current, -PAGE_STEPS),
            KeyCode::PageUp => range.step_by(current, PAGE_STEPS),
            KeyCode::Home => range.min_sats(),
            KeyCode::End => range.grid_max(),
            _ => return None,
        };

        Some(Message::SliderChanged { value })
    }

    fn slider_message(slider: Rect, column: u16, picker: &ChannelSizePicker) -> Option<Message> {
        let ratio = ratio_at(slider, column)?;
        Some(Message::SliderChanged {
            value: picker.range().value_at(ratio),
        })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::range::ChannelSizeOptions;

    #[fixture]
    fn picker() -> ChannelSizePicker {
        ChannelSizePicker::default()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Apply a message the way the host does and resync the field.
    fn apply(
        component: &mut ChannelSizeComponent,
        picker: &mut ChannelSizePicker,
        message: Option<Message>,
    ) -> Vec<u64> {
        let mut notified = vec![];
        if let Some(message) = message {
            picker.update(message, &mut |sats: u64| notified.push(sats));
        }
        component.sync(picker);
        notified
    }

    #[rstest]
    fn test_new_shows_displayed_value(picker: ChannelSizePicker) {
        let component = ChannelSizeComponent::new(&picker);
        assert_eq!(component.text(), "1,000,000");
        assert_eq!(component.focus(), Focus::TextField);
    }

    #[rstest]
    fn test_typing_emits_text_changed(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        let message = component.handle_key(key(KeyCode::Char('5')), &picker);
        assert_eq!(
            message,
            Some(Message::TextChanged {
                text: "1,000,0005".to_owned()
            })
        );
    }

    #[rstest]
    fn test_typing_is_normalized_and_resynced(mut picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);

        let message = component.handle_key(key(KeyCode::Backspace), &picker);
        let notified = apply(&mut component, &mut picker, message);

        assert_eq!(notified, vec![150_000]);
        assert_eq!(picker.displayed(), 150_000);
        assert_eq!(component.text(), "150,000");
    }

    #[rstest]
    fn test_typing_letter_keeps_value(mut picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);

        let message = component.handle_key(key(KeyCode::Char('x')), &picker);
        let notified = apply(&mut component, &mut picker, message);

        // The digits are unchanged, so the same value is accepted again
        assert_eq!(notified, vec![1_000_000]);
        assert_eq!(component.text(), "1,000,000");
    }

    #[rstest]
    fn test_cursor_movement_emits_nothing(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        assert_eq!(component.handle_key(key(KeyCode::Left), &picker), None);
    }

    #[rstest]
    fn test_paste(mut picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.textarea = TextArea::default();

        let message = component.handle_paste("2,500,000 sats", &picker);
        let notified = apply(&mut component, &mut picker, message);

        assert_eq!(notified, vec![2_500_000]);
        assert_eq!(component.text(), "2,500,000");
    }

    #[rstest]
    fn test_paste_ignored_on_slider(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.set_focus(Focus::Slider);
        assert_eq!(component.handle_paste("2500000", &picker), None);
    }

    #[rstest]
    #[case::left(KeyCode::Left, 950_000)]
    #[case::h(KeyCode::Char('h'), 950_000)]
    #[case::down(KeyCode::Down, 950_000)]
    #[case::right(KeyCode::Right, 1_050_000)]
    #[case::k(KeyCode::Char('k'), 1_050_000)]
    #[case::page_up(KeyCode::PageUp, 1_950_000)]
    #[case::page_down(KeyCode::PageDown, 150_000)]
    #[case::home(KeyCode::Home, 150_000)]
    #[case::end(KeyCode::End, 16_750_000)]
    fn test_slider_keys(picker: ChannelSizePicker, #[case] code: KeyCode, #[case] expected: u64) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.set_focus(Focus::Slider);
        assert_eq!(
            component.handle_key(key(code), &picker),
            Some(Message::SliderChanged { value: expected })
        );
    }

    #[rstest]
    fn test_slider_ignores_other_keys(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.set_focus(Focus::Slider);
        assert_eq!(component.handle_key(key(KeyCode::Char('5')), &picker), None);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let picker = ChannelSizePicker::new(None, ChannelSizeOptions::default(), true);
        let mut component = ChannelSizeComponent::new(&picker);
        component.set_area(Rect::new(0, 0, 40, 6));

        assert_eq!(component.handle_key(key(KeyCode::Char('5')), &picker), None);
        assert_eq!(component.handle_paste("5", &picker), None);
        component.set_focus(Focus::Slider);
        assert_eq!(component.handle_key(key(KeyCode::Right), &picker), None);
        assert_eq!(
            component.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 4), &picker),
            None
        );
        assert_eq!(component.text(), "1,000,000");
    }

    #[rstest]
    fn test_mouse_click_and_drag_on_slider(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.set_area(Rect::new(0, 0, 41, 6));

        let down = component.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 0, 4),
            &picker,
        );
        assert_eq!(down, Some(Message::SliderChanged { value: 150_000 }));
        assert_eq!(component.focus(), Focus::Slider);

        let drag = component.handle_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), 200, 0),
            &picker,
        );
        assert_eq!(drag, Some(Message::SliderChanged { value: 16_750_000 }));

        component.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 200, 0), &picker);
        let after_release = component.handle_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), 10, 4),
            &picker,
        );
        assert_eq!(after_release, None);
    }

    #[rstest]
    fn test_mouse_click_on_field_focuses_it(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.set_area(Rect::new(0, 0, 40, 6));
        component.set_focus(Focus::Slider);

        let message = component.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 3, 2),
            &picker,
        );
        assert_eq!(message, None);
        assert_eq!(component.focus(), Focus::TextField);
    }

    #[rstest]
    fn test_sync_follows_reconcile(mut picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.handle_key(key(KeyCode::Char('9')), &picker);

        picker.reconcile(Some(3_000_000));
        component.sync(&picker);
        assert_eq!(component.text(), "3,000,000");
    }

    #[rstest]
    fn test_focus_next(picker: ChannelSizePicker) {
        let mut component = ChannelSizeComponent::new(&picker);
        component.focus_next();
        assert_eq!(component.focus(), Focus::Slider);
        component.focus_next();
        assert_eq!(component.focus(), Focus::TextField);
    }
}

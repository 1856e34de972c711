//! Owner page hosting the channel size picker

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    action::Action,
    domain::sats::{format_sats, group_thousands},
    infrastructure::{
        config::Config,
        tui::{Event, Frame, TuiLike},
    },
    model::channel_size::{ChannelSizeNotifier, ChannelSizePicker, Message},
    presentation::{components::ChannelSizeComponent, widgets::channel_size::HEIGHT},
};

const TITLE: &str = "Open a channel";
const HINTS: &str = "enter submit  tab focus  ctrl-d disable  ctrl-r reset  esc quit";
/// Widest the picker grows on large terminals.
const MAX_PICKER_WIDTH: u16 = 72;

/// The page's own copy of the channel size form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSizeOwner {
    pub channel_size: Option<u64>,
    pub disabled: bool,
}

impl ChannelSizeNotifier for ChannelSizeOwner {
    fn set_channel_size(&mut self, sats: u64) {
        log::info!("Channel size set to {sats} sats");
        self.channel_size = Some(sats);
    }
}

pub struct App<'a> {
    config: Config,
    owner: ChannelSizeOwner,
    picker: ChannelSizePicker,
    component: ChannelSizeComponent<'a>,
    should_quit: bool,
    submitted: Option<u64>,
}

impl<'a> App<'a> {
    pub fn new(config: Config) -> Self {
        let owner = ChannelSizeOwner {
            channel_size: config.channel_size.initial,
            disabled: config.channel_size.disabled,
        };
        let picker = ChannelSizePicker::new(
            owner.channel_size,
            config.channel_size.options.clone(),
            owner.disabled,
        );
        let component = ChannelSizeComponent::new(&picker);

        Self {
            config,
            owner,
            picker,
            component,
            should_quit: false,
            submitted: None,
        }
    }

    pub fn owner(&self) -> &ChannelSizeOwner {
        &self.owner
    }

    pub fn picker(&self) -> &ChannelSizePicker {
        &self.picker
    }

    pub fn component(&self) -> &ChannelSizeComponent<'a> {
        &self.component
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Channel size confirmed with [`Action::Submit`].
    pub fn submitted(&self) -> Option<u64> {
        self.submitted
    }

    /// Run the event loop until quit, submit or the end of the event source.
    pub async fn run(&mut self, tui: &mut dyn TuiLike) -> Result<Option<u64>> {
        tui.enter()?;
        let result = self.event_loop(tui).await;
        tui.exit()?;
        result?;

        Ok(self.submitted)
    }

    async fn event_loop(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        while let Some(event) = tui.next().await {
            self.handle_event(event, tui)?;
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, tui: &mut dyn TuiLike) -> Result<()> {
        match event {
            Event::Init | Event::Render => self.render(tui)?,
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                self.render(tui)?;
            }
            Event::Quit | Event::Closed => self.should_quit = true,
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                let message = self.component.handle_mouse(mouse, &self.picker);
                self.dispatch(message);
            }
            Event::Paste(text) => {
                let message = self.component.handle_paste(&text, &self.picker);
                self.dispatch(message);
            }
            Event::Error => log::warn!("Terminal reported an error event"),
            Event::Tick | Event::FocusGained | Event::FocusLost => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.config.keybindings.action_for(&key) {
            Some(action) => self.perform(action),
            None => {
                let message = self.component.handle_key(key, &self.picker);
                self.dispatch(message);
            }
        }
    }

    pub fn perform(&mut self, action: Action) {
        log::debug!("Action: {action}");
        match action {
            Action::Quit => self.should_quit = true,
            Action::Submit => {
                // An untouched form submits the value the picker shows
                let sats = self
                    .owner
                    .channel_size
                    .unwrap_or_else(|| self.picker.displayed());
                self.submitted = Some(sats);
                self.should_quit = true;
            }
            // Two focus targets, so both directions toggle
            Action::FocusNext | Action::FocusPrev => self.component.focus_next(),
            Action::ToggleDisabled => {
                self.owner.disabled = !self.owner.disabled;
                self.picker.set_disabled(self.owner.disabled);
            }
            Action::ResetChannelSize => {
                self.owner.channel_size = None;
                self.picker.reconcile(self.owner.channel_size);
            }
        }
        self.component.sync(&self.picker);
    }

    fn dispatch(&mut self, message: Option<Message>) {
        let Some(message) = message else {
            return;
        };
        self.picker.update(message, &mut self.owner);
        self.picker.reconcile(self.owner.channel_size);
        self.component.sync(&self.picker);
    }

    fn render(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        tui.draw(&mut |frame: &mut Frame<'_>| self.view(frame))
    }

    fn view(&mut self, frame: &mut Frame<'_>) {
        let styles = &self.config.styles;
        let [title, _, body, _, status, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [body] = Layout::horizontal([Constraint::Max(MAX_PICKER_WIDTH)]).areas(body);

        frame.render_widget(
            Paragraph::new(TITLE).style(styles.style("label")),
            title,
        );
        self.component.view(&self.picker, styles, frame, body);
        frame.render_widget(Paragraph::new(self.status_line()), status);
        frame.render_widget(
            Paragraph::new(HINTS).style(styles.style("scale")),
            hints,
        );
    }

    fn status_line(&self) -> String {
        let value = match self.owner.channel_size {
            Some(sats) => format!("{} ({} sats)", format_sats(sats), group_thousands(sats)),
            None => String::from("not set"),
        };
        if self.owner.disabled {
            format!("Selected: {value} [disabled]")
        } else {
            format!("Selected: {value}")
        }
    }
}

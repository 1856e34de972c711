use crate::domain::{
    range::{ChannelSizeOptions, EffectiveRange},
    sats,
};

/// Value shown when the owner has not chosen a channel size yet.
pub const DEFAULT_CHANNEL_SIZE: u64 = 1_000_000;

/// User input from one of the two input surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SliderChanged { value: u64 },
    TextChanged { text: String },
}

/// Receives every accepted channel size.
pub trait ChannelSizeNotifier {
    fn set_channel_size(&mut self, sats: u64);
}

impl<F> ChannelSizeNotifier for F
where
    F: FnMut(u64),
{
    fn set_channel_size(&mut self, sats: u64) {
        self(sats)
    }
}

/// State of the channel size picker.
///
/// The owner's value is the source of truth: [`ChannelSizePicker::reconcile`]
/// replaces whatever the user typed or dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSizePicker {
    options: ChannelSizeOptions,
    range: EffectiveRange,
    channel_size: Option<u64>,
    displayed: u64,
    disabled: bool,
}

impl ChannelSizePicker {
    pub fn new(channel_size: Option<u64>, options: ChannelSizeOptions, disabled: bool) -> Self {
        let range = EffectiveRange::resolve(&options);
        Self {
            displayed: initial_value(&range, channel_size),
            options,
            range,
            channel_size,
            disabled,
        }
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn range(&self) -> &EffectiveRange {
        &self.range
    }

    pub fn options(&self) -> &ChannelSizeOptions {
        &self.options
    }

    pub fn channel_size(&self) -> Option<u64> {
        self.channel_size
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Text field content, grouped by thousands.
    pub fn text_value(&self) -> String {
        sats::group_thousands(self.displayed)
    }

    pub fn btc_label(&self) -> String {
        format!("{} BTC", sats::sats_to_btc(self.displayed))
    }

    /// Apply an owner-side change of the channel size.
    pub fn reconcile(&mut self, channel_size: Option<u64>) {
        self.channel_size = channel_size;
        self.displayed = initial_value(&self.range, channel_size);
        log::debug!(
            "channel size reconciled: external={channel_size:?} displayed={}",
            self.displayed
        );
    }

    /// Apply owner-side options, re-clamping from the owner's value.
    pub fn set_options(&mut self, options: ChannelSizeOptions) {
        self.range = EffectiveRange::resolve(&options);
        self.options = options;
        self.reconcile(self.channel_size);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Handle user input. Accepted values are stored first, then passed to
    /// `notifier`.
    pub fn update(&mut self, message: Message, notifier: &mut impl ChannelSizeNotifier) {
        if self.disabled {
            log::trace!("ignoring {message:?} while disabled");
            return;
        }

        let accepted = match message {
            Message::SliderChanged { value } => Some(self.range.clamp(value)),
            Message::TextChanged { ref text } => self.range.normalize_text(text),
        };

        match accepted {
            Some(sats) => {
                self.displayed = sats;
                log::debug!("channel size changed: {sats}");
                notifier.set_channel_size(sats);
            }
            None => log::trace!("ignoring unparseable input {message:?}"),
        }
    }
}

impl Default for ChannelSizePicker {
    fn default() -> Self {
        Self::new(None, ChannelSizeOptions::default(), false)
    }
}

fn initial_value(range: &EffectiveRange, channel_size: Option<u64>) -> u64 {
    let sats = channel_size
        .filter(|sats| *sats != 0)
        .unwrap_or(DEFAULT_CHANNEL_SIZE);
    range.clamp(sats)
}

pub mod channel_size;

pub use channel_size::ChannelSizeComponent;

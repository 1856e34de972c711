use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "SATS",
        help = "Initial channel size in satoshis"
    )]
    pub channel_size: Option<u64>,

    #[arg(
        long,
        value_name = "SATS",
        help = "Minimum channel size, e.g. 200000"
    )]
    pub min_channel_size: Option<String>,

    #[arg(
        long,
        value_name = "SATS",
        help = "Maximum channel size, e.g. 5000000"
    )]
    pub max_channel_size: Option<String>,

    #[arg(short, long, help = "Start with the picker disabled")]
    pub disabled: bool,

    #[arg(long, help = "Leave mouse events to the terminal")]
    pub no_mouse: bool,

    #[arg(long, help = "Deliver pasted text as individual key presses")]
    pub no_paste: bool,
}

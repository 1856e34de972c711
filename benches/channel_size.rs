use std::hint::black_box;

use chansize::{
    domain::{
        range::{ChannelSizeOptions, EffectiveRange},
        sats::{format_sats, group_thousands, sats_to_btc},
    },
    model::channel_size::{ChannelSizePicker, Message},
};
use criterion::{criterion_group, criterion_main, Criterion};

const SAMPLES: [u64; 6] = [250, 2_500, 150_000, 1_234_567, 12_000_000, 16_777_216];

fn benchmark(c: &mut Criterion) {
    let options = [
        ChannelSizeOptions::default(),
        ChannelSizeOptions::new()
            .min_channel_size("300000sats")
            .max_channel_size(5_000_000.5),
        ChannelSizeOptions::new().max_channel_size(100_000),
    ];
    c.bench_function("resolve", |b| {
        b.iter(|| {
            for options in &options {
                black_box(EffectiveRange::resolve(black_box(options)));
            }
        })
    });

    let range = EffectiveRange::default();
    c.bench_function("normalize_text", |b| {
        b.iter(|| range.normalize_text(black_box("1,234,567abc")))
    });

    c.bench_function("format", |b| {
        b.iter(|| {
            for sats in SAMPLES {
                black_box(format_sats(black_box(sats)));
                black_box(sats_to_btc(black_box(sats)));
                black_box(group_thousands(black_box(sats)));
            }
        })
    });

    c.bench_function("update_text", |b| {
        let mut picker = ChannelSizePicker::default();
        b.iter(|| {
            picker.update(
                Message::TextChanged {
                    text: black_box("2,500,000").to_owned(),
                },
                &mut |sats: u64| {
                    black_box(sats);
                },
            )
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log to stderr, so stdout only has the answer.
pub fn init_logging(verbosity: u8) {
    let console_layer = fmt::Layer::new()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(level_filter(verbosity));

    tracing_subscriber::registry().with(console_layer).init();
}

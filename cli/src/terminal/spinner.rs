use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TIP_DURATION: Duration = Duration::from_secs(1);
const MESSAGE_READ_TIME: Duration = Duration::from_secs(2);
const TIPS: &[&str] = &[
    "Use --offline to value names without any lookups",
    "Use -f json for machine-readable output",
    "Slow registry? Try --no-whois",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}

/// Styles `span`'s progress bar and alternates `message` with usage tips
/// until `running` is cleared.
pub fn start_lookup_spinner(span: Span, message: String, running: Arc<AtomicBool>) -> JoinHandle<()> {
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&message);

    thread::spawn(move || {
        let mut tip_index: usize = 0;
        let mut is_showing_tip: bool = false;
        let mut next_action_time: Instant = Instant::now() + MESSAGE_READ_TIME;

        while running.load(Ordering::Relaxed) {
            if Instant::now() >= next_action_time {
                if is_showing_tip {
                    span.pb_set_message(&message);
                    next_action_time = Instant::now() + MESSAGE_READ_TIME;
                } else {
                    let tip: &str = TIPS[tip_index % TIPS.len()];
                    span.pb_set_message(&format!("{}", tip.italic().white()));
                    tip_index += 1;
                    next_action_time = Instant::now() + TIP_DURATION;
                }
                is_showing_tip = !is_showing_tip;
            }
            thread::sleep(POLL_INTERVAL);
        }
    })
}

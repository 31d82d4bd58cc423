use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use domval_common::log::SUCCESS_TARGET;

use super::print::{PRINT_TARGET, RAW_MSG_FIELD};

/// Installs the global subscriber.
///
/// Report lines (the [`PRINT_TARGET`]) go to stdout untouched, everything
/// else to stderr with a level symbol. Both writers are routed through the
/// indicatif layer so the spinner is redrawn below them.
pub fn init_logging(quiet: u8) {
    let indicatif_layer = IndicatifLayer::new();

    let writer = indicatif_layer
        .get_stdout_writer()
        .with_filter(|meta: &tracing::Metadata<'_>| meta.target() == PRINT_TARGET)
        .or_else(indicatif_layer.get_stderr_writer());

    let env_directives: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(env_directives.as_deref(), quiet);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(DomvalFormatter)
                .with_writer(writer)
                .with_filter(filter),
        )
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}

/// `RUST_LOG` (when valid) or the quiet level sets the diagnostic floor.
/// Report and success lines stay enabled either way.
fn build_filter(env_directives: Option<&str>, quiet: u8) -> EnvFilter {
    let floor: &str = match quiet {
        0 => "info",
        _ => "warn",
    };

    let mut filter: EnvFilter = env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(floor));

    for target in [PRINT_TARGET, SUCCESS_TARGET] {
        if let Ok(directive) = format!("{target}=info").parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

pub struct DomvalFormatter;

impl<S, N> FormatEvent<S, N> for DomvalFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if meta.target() == SUCCESS_TARGET {
            let mut message = String::new();
            ctx.field_format()
                .format_fields(Writer::new(&mut message), event)?;
            return writeln!(writer, "{}", message.green().bold());
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_MSG_FIELD {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == RAW_MSG_FIELD {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

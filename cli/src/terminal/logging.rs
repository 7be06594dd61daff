use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

pub const PRINT_TARGET: &str = "dnscheck::print";
pub const SUCCESS_TARGET: &str = "dnscheck::success";

/// Installs the global subscriber.
///
/// Events go to stderr through the indicatif writer so they never tear the
/// progress bar. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(DnsCheckFormatter)
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .init();
}

pub struct DnsCheckFormatter;

impl<S, N> FormatEvent<S, N> for DnsCheckFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*meta.level(), meta.target()) {
                (Level::INFO, SUCCESS_TARGET) => ("[+]", |s| s.green().bold()),
                (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[*]", |s| s.cyan().bold()),
                (Level::WARN, _) => ("[!]", |s| s.yellow().bold()),
                (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

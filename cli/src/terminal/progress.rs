use dnscheck_core::progress::{ProgressRenderer, ProgressSnapshot};
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Span that carries the progress bar while probes run.
pub fn probe_span() -> Span {
    let span: Span = info_span!("probing", indicatif.pb_show = true);
    if let Ok(style) = ProgressStyle::with_template("{msg}") {
        span.pb_set_style(&style);
    }
    span
}

/// Draws each snapshot into the bar of the span it was built from.
pub struct SpanProgress {
    span: Span,
}

impl SpanProgress {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl ProgressRenderer for SpanProgress {
    fn render(&mut self, snapshot: &ProgressSnapshot) {
        self.span.pb_set_message(&snapshot.render());
    }
}

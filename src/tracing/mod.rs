//! Extensions and utilities for the [`tracing`] crate.

use miette::IntoDiagnostic;
use supports_color::Stream;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

use crate::cli::Opts;

/// Options for initializing the [`tracing`] logging framework. This is like a lower-effort builder
/// interface, mostly provided because Rust tragically lacks named arguments.
pub struct TracingOpts<'opts> {
    /// Filter directives to control which events are logged.
    pub filter_directives: &'opts str,
    /// Control which span events are logged.
    pub trace_spans: &'opts [FmtSpan],
}

impl<'opts> TracingOpts<'opts> {
    /// Construct options for initializing the [`tracing`] logging framework from parsed
    /// command-line interface arguments as [`Opts`].
    pub fn from_cli(opts: &'opts Opts) -> Self {
        Self {
            filter_directives: &opts.logging.tracing_filter,
            trace_spans: &opts.logging.trace_spans,
        }
    }

    /// Initialize the [`tracing`] logging framework.
    ///
    /// Events go to stderr. Stdout is reserved for the report.
    pub fn install(&self) -> miette::Result<()> {
        // Only `--tracing-filter` picks what's logged; `$RUST_LOG` is ignored.
        let env_filter = EnvFilter::try_new(self.filter_directives).into_diagnostic()?;

        let fmt_layer = fmt::layer()
            .with_span_events(self.fmt_span())
            .with_writer(std::io::stderr)
            .with_ansi(supports_color::on(Stream::Stderr).is_some())
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .into_diagnostic()?;

        Ok(())
    }

    fn fmt_span(&self) -> FmtSpan {
        self.trace_spans
            .iter()
            .fold(FmtSpan::NONE, |result, item| result | item.clone())
    }
}

//! Command-line argument parser and argument access.

use clap::builder::ValueParserFactory;
use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::clap::EnvFilterValueParser;
use crate::clap::FmtSpanParserFactory;
use crate::clap::RustBacktrace;
use crate::clap::RustBacktraceValueParser;

/// Prints the security features report for the CRM application.
///
/// The report is fixed; no option changes what is written to stdout.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// Options to modify logging and error-handling behavior.
    #[command(flatten)]
    pub logging: LoggingOpts,
}

/// Options to modify logging and error-handling behavior.
///
/// Logs are written to stderr so they never mix with the report.
#[derive(Debug, Clone, clap::Args)]
#[clap(next_help_heading = "Logging options")]
pub struct LoggingOpts {
    #[allow(rustdoc::bare_urls)]
    /// Tracing filter.
    ///
    /// Can be any of "error", "warn", "info", "debug", or "trace". Supports more granular
    /// filtering, as well.
    ///
    /// The grammar is: `target[span{field=value}]=level`, where `target` is a module path, `span`
    /// is a span name, and `level` is one of the levels listed above.
    ///
    /// See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
    ///
    /// A nice value is "crm_security_report=debug".
    #[arg(
        long,
        default_value = "crm_security_report=warn",
        value_parser = EnvFilterValueParser::default()
    )]
    pub tracing_filter: String,

    /// How to display backtraces in error messages.
    ///
    /// Read from `$RUST_BACKTRACE` like the standard library does: anything other than "0" or
    /// "full" turns backtraces on.
    #[arg(
        long,
        env = "RUST_BACKTRACE",
        default_value = "0",
        value_parser = RustBacktraceValueParser
    )]
    pub backtrace: RustBacktrace,

    /// When to log span events.
    ///
    /// Allows multiple values, comma-separated.
    #[arg(
        long,
        default_value = "new,close",
        value_delimiter = ',',
        value_parser = FmtSpanParserFactory::value_parser()
    )]
    pub trace_spans: Vec<FmtSpan>,
}

impl Opts {
    /// Perform late initialization of the command-line arguments. If `init` isn't called before
    /// the arguments are used, the behavior is undefined.
    pub fn init(&mut self) {
        // Lets the standard library's panic handler and `miette` see the option.
        std::env::set_var("RUST_BACKTRACE", self.logging.backtrace.to_string());
    }
}

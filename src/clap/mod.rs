//! Adapters for parsing [`clap`] arguments to various types.

mod env_filter;
mod error_message;
mod fmt_span;
mod rust_backtrace;

pub use env_filter::EnvFilterValueParser;
pub use error_message::value_validation_error;
pub use fmt_span::FmtSpanParserFactory;
pub use rust_backtrace::RustBacktrace;
pub use rust_backtrace::RustBacktraceValueParser;

//! Adapter for parsing the `$RUST_BACKTRACE` environment variable with a
//! [`clap::builder::Arg::value_parser`].

use std::ffi::OsStr;
use std::fmt::Display;

use clap::builder::PossibleValue;
use clap::builder::TypedValueParser;
use clap::builder::ValueParserFactory;

/// Whether error reports include backtraces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RustBacktrace {
    /// No backtraces.
    Off,
    /// Backtraces, with runtime frames trimmed.
    On,
    /// Backtraces with every frame.
    Full,
}

impl RustBacktrace {
    /// Interpret a `$RUST_BACKTRACE` value like the standard library does: `0` is off, `full` is
    /// full, and anything else turns backtraces on.
    pub fn from_env_value(value: &OsStr) -> Self {
        if value == "0" {
            Self::Off
        } else if value == "full" {
            Self::Full
        } else {
            Self::On
        }
    }
}

impl Display for RustBacktrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RustBacktrace::Off => write!(f, "0"),
            RustBacktrace::On => write!(f, "1"),
            RustBacktrace::Full => write!(f, "full"),
        }
    }
}

/// Never fails, so a stray `$RUST_BACKTRACE` can't stop the report from printing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustBacktraceValueParser;

impl TypedValueParser for RustBacktraceValueParser {
    type Value = RustBacktrace;

    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        Ok(RustBacktrace::from_env_value(value))
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(
            [
                PossibleValue::new("0").help("Hide backtraces in errors"),
                PossibleValue::new("1").help("Display backtraces in errors"),
                PossibleValue::new("full")
                    .help("Display backtraces with all stack frames in errors"),
            ]
            .into_iter(),
        ))
    }
}

impl ValueParserFactory for RustBacktrace {
    type Parser = RustBacktraceValueParser;

    fn value_parser() -> Self::Parser {
        RustBacktraceValueParser
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Opts {
        #[arg(long, value_parser = RustBacktraceValueParser)]
        backtrace: RustBacktrace,
    }

    fn parse(value: &str) -> RustBacktrace {
        Opts::try_parse_from(["report", "--backtrace", value])
            .unwrap()
            .backtrace
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("0"), RustBacktrace::Off);
        assert_eq!(parse("1"), RustBacktrace::On);
        assert_eq!(parse("short"), RustBacktrace::On);
        assert_eq!(parse("full"), RustBacktrace::Full);
    }

    #[test]
    fn test_unknown_values_turn_backtraces_on() {
        assert_eq!(parse("true"), RustBacktrace::On);
        assert_eq!(parse("2"), RustBacktrace::On);
        assert_eq!(parse("yes"), RustBacktrace::On);
        assert_eq!(parse("FULL"), RustBacktrace::On);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value() {
        use std::os::unix::ffi::OsStrExt;

        assert_eq!(
            RustBacktrace::from_env_value(OsStr::from_bytes(b"\xff\xfe")),
            RustBacktrace::On
        );
    }

    #[test]
    fn test_display_round_trips_through_env() {
        for value in [RustBacktrace::Off, RustBacktrace::On, RustBacktrace::Full] {
            assert_eq!(
                RustBacktrace::from_env_value(OsStr::new(&value.to_string())),
                value
            );
        }
    }
}

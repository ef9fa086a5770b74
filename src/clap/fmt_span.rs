//! Adapter for parsing the [`FmtSpan`] type.

use clap::builder::EnumValueParser;
use clap::builder::PossibleValue;
use clap::builder::TypedValueParser;
use clap::builder::ValueParserFactory;
use tracing_subscriber::fmt::format::FmtSpan;

/// Wrapper around [`FmtSpan`], which is a foreign type.
#[derive(Clone)]
pub struct FmtSpanWrapper(FmtSpan);

impl From<FmtSpanWrapper> for FmtSpan {
    fn from(value: FmtSpanWrapper) -> Self {
        value.0
    }
}

impl clap::ValueEnum for FmtSpanWrapper {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(FmtSpan::NEW),
            Self(FmtSpan::CLOSE),
            Self(FmtSpan::ACTIVE),
            Self(FmtSpan::FULL),
            Self(FmtSpan::NONE),
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self.0 {
            FmtSpan::NEW => PossibleValue::new("new").help("Log when a span starts"),
            FmtSpan::CLOSE => {
                PossibleValue::new("close").help("Log when a span ends, with its timings")
            }
            FmtSpan::ACTIVE => {
                PossibleValue::new("active").help("Log when a span is entered or exited")
            }
            FmtSpan::FULL => PossibleValue::new("full").help("Log every span event"),
            FmtSpan::NONE => PossibleValue::new("none").help("Don't log span events"),
            _ => {
                return None;
            }
        })
    }
}

/// [`clap`] parser factory for [`FmtSpan`] values.
pub struct FmtSpanParserFactory;

impl ValueParserFactory for FmtSpanParserFactory {
    type Parser = clap::builder::MapValueParser<
        EnumValueParser<FmtSpanWrapper>,
        fn(FmtSpanWrapper) -> FmtSpan,
    >;

    fn value_parser() -> Self::Parser {
        EnumValueParser::<FmtSpanWrapper>::new().map(Into::into)
    }
}

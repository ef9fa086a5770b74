//! Adapter for validating [`EnvFilter`] directives with a
//! [`clap::builder::Arg::value_parser`].

use clap::builder::StringValueParser;
use clap::builder::TypedValueParser;
use tracing_subscriber::EnvFilter;

use super::value_validation_error;

/// Parses a string, rejecting it if it isn't a valid set of [`EnvFilter`] directives.
///
/// [`EnvFilter`] isn't [`Clone`], so the directives are kept as a string and parsed again when
/// logging is installed.
#[derive(Default, Clone)]
pub struct EnvFilterValueParser {
    inner: StringValueParser,
}

impl TypedValueParser for EnvFilterValueParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        self.inner.parse_ref(cmd, arg, value).and_then(|directives| {
            match EnvFilter::try_new(&directives) {
                Ok(_) => Ok(directives),
                Err(err) => Err(value_validation_error(arg, &directives, err)),
            }
        })
    }
}

//! Writing a [`LineSequence`] to an output stream.

use std::error::Error;
use std::fmt::Display;
use std::io;

use tokio::io::AsyncWriteExt;
use tokio::io::BufWriter;
use tracing::instrument;

use crate::report::crm_security_report;
use crate::report::LineSequence;
use crate::writer::ReportWriter;

/// Writes reports line by line.
pub struct ReportPrinter {
    writer: BufWriter<ReportWriter>,
}

impl ReportPrinter {
    /// Construct a printer writing to the given destination.
    pub fn new(writer: ReportWriter) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write every line followed by a newline, in order, then flush and close the writer.
    ///
    /// Returns the number of lines written.
    #[instrument(skip_all, name = "print_report", level = "debug")]
    pub async fn print(&mut self, lines: &LineSequence) -> Result<usize, OutputUnavailable> {
        let mut line_buffer = String::new();
        for line in lines.iter() {
            // Each line goes out in one piece, newline included.
            line_buffer.clear();
            line_buffer.push_str(line);
            line_buffer.push('\n');
            self.writer
                .write_all(line_buffer.as_bytes())
                .await
                .map_err(OutputUnavailable::new)?;
        }

        // This is load-bearing! `tokio::io::Stdout` writes on a background thread, and only
        // `flush` waits for that write and reports its error. `shutdown` returns immediately.
        self.writer
            .flush()
            .await
            .map_err(OutputUnavailable::new)?;
        self.writer
            .shutdown()
            .await
            .map_err(OutputUnavailable::new)?;

        tracing::debug!(lines = lines.len(), "Wrote report");
        Ok(lines.len())
    }
}

/// Print the CRM security report to standard output.
pub async fn run() -> Result<(), OutputUnavailable> {
    ReportPrinter::new(ReportWriter::stdout())
        .print(crm_security_report())
        .await?;
    Ok(())
}

/// The output stream stopped accepting writes.
#[derive(Debug)]
pub struct OutputUnavailable {
    source: io::Error,
}

impl OutputUnavailable {
    fn new(source: io::Error) -> Self {
        Self { source }
    }

    /// The kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl Error for OutputUnavailable {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl Display for OutputUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Output stream is unavailable")
    }
}

impl miette::Diagnostic for OutputUnavailable {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new("crm_security_report::output_unavailable"))
    }
}

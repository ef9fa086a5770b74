use std::fmt::Debug;
use std::io;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;
use tokio::io::AsyncWrite;
use tokio::io::DuplexStream;
use tokio::io::Sink;
use tokio::io::Stdout;

/// Where the report gets written.
#[derive(Debug)]
pub enum ReportWriter {
    /// The process's standard output.
    Stdout(Stdout),
    /// One half of an in-memory pipe.
    DuplexStream(DuplexStream),
    /// Discards everything.
    Sink(Sink),
}

impl ReportWriter {
    /// Write to standard output.
    pub fn stdout() -> Self {
        Self::Stdout(tokio::io::stdout())
    }

    /// Write into one half of an in-memory pipe, from [`tokio::io::duplex`].
    pub fn duplex_stream(duplex_stream: DuplexStream) -> Self {
        Self::DuplexStream(duplex_stream)
    }

    /// Discard everything written.
    pub fn sink() -> Self {
        Self::Sink(tokio::io::sink())
    }
}

impl AsyncWrite for ReportWriter {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<Result<usize, io::Error>> {
        match Pin::into_inner(self) {
            Self::Stdout(ref mut x) => Pin::new(x).poll_write(cx, buf),
            Self::DuplexStream(ref mut x) => Pin::new(x).poll_write(cx, buf),
            Self::Sink(ref mut x) => Pin::new(x).poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
        match Pin::into_inner(self) {
            Self::Stdout(ref mut x) => Pin::new(x).poll_flush(cx),
            Self::DuplexStream(ref mut x) => Pin::new(x).poll_flush(cx),
            Self::Sink(ref mut x) => Pin::new(x).poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
        match Pin::into_inner(self) {
            Self::Stdout(ref mut x) => Pin::new(x).poll_shutdown(cx),
            Self::DuplexStream(ref mut x) => Pin::new(x).poll_shutdown(cx),
            Self::Sink(ref mut x) => Pin::new(x).poll_shutdown(cx),
        }
    }
}

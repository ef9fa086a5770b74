//! `crm-security-report` prints the security features report for the CRM application.
//!
//! The report is constant: a banner, seven numbered feature sections, the results of the
//! security tests, and a closing line. It is written to stdout exactly the same way on every run.
//!
//! The library is mostly here so the pieces can be tested on their own. It isn't a stable API.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod clap;
pub mod cli;
mod printer;
mod report;
mod tracing;
mod writer;

pub use printer::run;
pub use printer::OutputUnavailable;
pub use printer::ReportPrinter;
pub use report::crm_security_report;
pub use report::Finding;
pub use report::LineSequence;
pub use report::Outcome;
pub use report::Report;
pub use report::Results;
pub use report::Section;
pub use tracing::TracingOpts;
pub use writer::ReportWriter;

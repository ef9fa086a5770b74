//! `crm-security-report` prints the security features report for the CRM application.

use clap::Parser;
use crm_security_report::cli;
use crm_security_report::TracingOpts;
use miette::WrapErr;

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    miette::set_panic_hook();
    let mut opts = cli::Opts::parse();
    opts.init();
    TracingOpts::from_cli(&opts).install()?;

    crm_security_report::run()
        .await
        .wrap_err("Failed to print the security report")?;

    Ok(())
}

//! Unzip command implementation.

use crate::cli::UnzipArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::prompt::TerminalPrompt;
use anyhow::Result;
use jampzip_core::Capabilities;
use jampzip_core::ExtractOptions;
use jampzip_core::ExtractionPlan;

pub fn execute(args: &UnzipArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let plan = add_archive_context(
        ExtractionPlan::prepare(&args.archive, &Capabilities::detect()),
        &args.archive,
    )?;

    formatter.format_info(&format!(
        "Extracting {} to {}",
        plan.source().display(),
        plan.target().display()
    ));

    let options = ExtractOptions {
        use_password: args.password,
        delete_source: args.delete,
    };
    let report = add_archive_context(
        plan.execute(&options, &mut TerminalPrompt::new()),
        &args.archive,
    )?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}

//! Zip command implementation.

use crate::cli::ZipArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::prompt::TerminalPrompt;
use anyhow::Context;
use anyhow::Result;
use jampzip_core::ArchiveCreator;
use jampzip_core::CreationConfig;
use std::env;

pub fn execute(args: &ZipArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let source = match &args.source {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let mut config = CreationConfig::new(&args.output, source).with_password(args.password);
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let creator = ArchiveCreator::new(config);
    let output = creator.output_path();
    let report = add_archive_context(creator.create(&mut TerminalPrompt::new()), &output)?;

    formatter.format_creation_result(&report)?;

    Ok(())
}

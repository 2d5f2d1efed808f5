//! The hardcoded text scan over the project's source tree.

use anyhow::Result;

use super::super::args::HardcodeCheckCommand;
use super::helper::CommandContext;
use super::{CommandResult, HardcodeOutput};
use crate::rules::hardcoded::{ScanOptions, scan_tree};

pub fn hardcode_check(cmd: HardcodeCheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let extensions = if cmd.extensions.is_empty() {
        ctx.config.extensions.clone()
    } else {
        cmd.extensions.clone()
    };
    let options = ScanOptions {
        extensions,
        include_comments: cmd.include_comments || ctx.config.include_comments,
        min_text_length: ctx.config.min_text_length,
        max_text_length: ctx.config.max_text_length,
        ignore_texts: ctx.config.ignore_texts.clone(),
    };

    let scan = scan_tree(&ctx.source_root, &options, &ctx.config.ignores, ctx.verbose);
    Ok(CommandResult {
        output: HardcodeOutput {
            findings: scan.findings,
            files_scanned: scan.files_scanned,
            skipped_count: scan.skipped_count,
        }
        .into(),
        warnings: Vec::new(),
    })
}

//! `drafts` subcommand.

use crate::{codec, ctx::SdContext};
use anyhow::Result;
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `drafts` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct DraftsCmd;

impl DraftsCmd {
    /// Run the `drafts` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        let drafts = ctx.session.fetch_drafts().await?;

        if drafts.is_empty() {
            println!("No drafts.");
            return Ok(());
        }
        for file in drafts {
            println!(
                "{} {}",
                Color::Green.paint(file),
                Color::Cyan.italic().paint(codec::draft_branch_name(file))
            );
        }
        Ok(())
    }
}

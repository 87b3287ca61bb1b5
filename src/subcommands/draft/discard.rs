//! `discard` subcommand.

use crate::ctx::SdContext;
use anyhow::Result;
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `discard` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct DiscardCmd {
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

impl DiscardCmd {
    /// Run the `discard` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        ctx.load().await?;

        let branch = ctx.session.branch().to_string();
        if ctx.discard_draft(self.yes).await? {
            println!("Deleted draft branch `{}`.", Color::Blue.paint(branch));
        }
        Ok(())
    }
}

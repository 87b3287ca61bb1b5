//! `status` subcommand.

use crate::ctx::SdContext;
use anyhow::Result;
use clap::Args;

/// CLI arguments for the `status` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct StatusCmd;

impl StatusCmd {
    /// Run the `status` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        ctx.load().await?;
        ctx.print_status()
    }
}

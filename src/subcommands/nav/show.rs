//! `nav show` subcommand.

use crate::ctx::SdContext;
use anyhow::Result;
use clap::Args;

/// CLI arguments for the `nav show` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct ShowCmd {
    /// Print the tree as JSON, in the shape `nav save` reads
    #[arg(long)]
    json: bool,
}

impl ShowCmd {
    /// Run the `nav show` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        ctx.session.fetch_config().await;
        ctx.session.fetch_drafts().await?;

        if self.json {
            let tree = ctx.navigation_tree()?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
            return Ok(());
        }
        ctx.print_navigation()
    }
}

//! `nav save` subcommand.

use crate::{ctx::SdContext, navigation::UiTreeNode};
use anyhow::{anyhow, Result};
use clap::Args;
use nu_ansi_term::Color;
use std::path::PathBuf;

/// CLI arguments for the `nav save` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct SaveNavCmd {
    /// Path to the edited tree, as printed by `nav show --json`
    tree: PathBuf,
    /// Blob SHA of the navigation document being replaced
    #[arg(long)]
    sha: Option<String>,
}

impl SaveNavCmd {
    /// Run the `nav save` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        let source = std::fs::read_to_string(&self.tree)
            .map_err(|e| anyhow!("Failed to read {}: {}", self.tree.display(), e))?;
        let tree: Vec<UiTreeNode> = serde_json::from_str(&source)?;

        ctx.session.save_navigation(&tree, self.sha).await?;

        println!(
            "Saved navigation of {} top-level pages to `{}`.",
            tree.len(),
            Color::Blue.paint(ctx.session.branch())
        );
        Ok(())
    }
}

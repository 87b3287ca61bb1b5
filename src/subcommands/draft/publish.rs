//! `publish` subcommand.

use super::ContentArgs;
use crate::ctx::SdContext;
use anyhow::{anyhow, Result};
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `publish` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct PublishCmd {
    #[command(flatten)]
    content: ContentArgs,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

impl PublishCmd {
    /// Run the `publish` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        let current = ctx.load().await?;
        let file = ctx
            .session
            .file()
            .ok_or(anyhow!("Select a file to edit with `--file`."))?
            .to_string();

        let edit = self.content.edit(&file, current.as_ref())?;
        if !ctx.publish_draft(&edit, self.yes).await? {
            return Ok(());
        }

        println!(
            "Published `{}` to `{}`.",
            Color::Green.paint(&file),
            Color::Blue.paint(ctx.session.default_branch())
        );
        Ok(())
    }
}

//! `save` subcommand.

use super::ContentArgs;
use crate::{ctx::SdContext, session::DraftState};
use anyhow::{anyhow, Result};
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `save` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct SaveCmd {
    #[command(flatten)]
    content: ContentArgs,
}

impl SaveCmd {
    /// Run the `save` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        let current = ctx.load().await?;
        let file = ctx
            .session
            .file()
            .ok_or(anyhow!("Select a file to edit with `--file`."))?
            .to_string();

        let edit = self.content.edit(&file, current.as_ref())?;
        ctx.session.save(&edit).await?;

        match ctx.session.state() {
            DraftState::PrOpen { number, .. } => println!(
                "Saved a draft of `{}` for review in pull request #{}.",
                Color::Green.paint(&file),
                Color::Blue.paint(number.to_string())
            ),
            _ => println!(
                "Saved `{}` to `{}`.",
                Color::Green.paint(&file),
                Color::Blue.paint(ctx.session.branch())
            ),
        }
        Ok(())
    }
}

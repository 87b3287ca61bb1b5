//! `layouts` and `defaults` subcommands.

use crate::ctx::SdContext;
use anyhow::Result;
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `layouts` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct LayoutsCmd;

impl LayoutsCmd {
    /// Run the `layouts` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        for layout in ctx.session.fetch_config().await.get_layouts() {
            println!("{}", Color::Blue.paint(layout));
        }
        Ok(())
    }
}

/// CLI arguments for the `defaults` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct DefaultsCmd;

impl DefaultsCmd {
    /// Run the `defaults` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        print!("{}", ctx.session.fetch_config().await.get_defaults());
        Ok(())
    }
}

//! `assets` subcommand.

use crate::{assets, ctx::SdContext};
use anyhow::Result;
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `assets` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct AssetsCmd {
    /// Only list assets of this category (`images` or `documents`)
    #[arg(long, short)]
    category: Option<String>,
}

impl AssetsCmd {
    /// Run the `assets` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        let listing = ctx.session.fetch_assets().await?;

        let shown = match self.category.as_deref() {
            Some(category) => assets::filter_assets(listing, category)?,
            None => listing.iter().collect(),
        };
        for asset in shown {
            println!(
                "{} {}",
                Color::Green.paint(&asset.path),
                Color::DarkGray.paint(format!("{} bytes", asset.size))
            );
        }
        Ok(())
    }
}

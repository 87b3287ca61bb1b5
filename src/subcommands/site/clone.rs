//! `clone` subcommand.

use crate::{
    ctx::SdContext,
    session::{CloneDestination, CloneSource},
};
use anyhow::Result;
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `clone` subcommand.
///
/// The site selected with `--owner` and `--repo` is the template being cloned.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct CloneCmd {
    /// Name of the new repository
    destination: String,
    /// Organization to create the repository in. Defaults to the authenticated user
    #[arg(long)]
    organization: Option<String>,
    /// Branch of the new site to build
    #[arg(long)]
    branch: Option<String>,
    /// Site build engine
    #[arg(long)]
    engine: Option<String>,
}

impl CloneCmd {
    /// Run the `clone` subcommand.
    pub async fn run(self, ctx: SdContext) -> Result<()> {
        let source = CloneSource {
            owner: ctx.session.owner().to_string(),
            repository: ctx.session.repository().to_string(),
        };
        let destination = CloneDestination {
            repository: self.destination,
            organization: self.organization,
            branch: self.branch,
            engine: self.engine,
        };

        ctx.session
            .clone_repository(&ctx.settings.server_base, &source, &destination)
            .await?;

        println!(
            "Cloned `{}` into `{}`.",
            Color::Blue.paint(format!("{}/{}", source.owner, source.repository)),
            Color::Green.paint(&destination.repository)
        );
        Ok(())
    }
}

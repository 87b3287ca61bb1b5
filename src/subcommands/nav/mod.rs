//! Subcommands pertaining to the site navigation.

use crate::ctx::SdContext;
use clap::Subcommand;

mod show;
pub use show::ShowCmd;

mod save;
pub use save::SaveNavCmd;

#[derive(Debug, Clone, Eq, PartialEq, Subcommand)]
pub enum NavCmd {
    /// Print the navigation tree, marking pages that have a draft.
    #[clap(aliases = ["l", "ls"])]
    Show(ShowCmd),
    /// Commit an edited navigation tree.
    Save(SaveNavCmd),
}

impl NavCmd {
    /// Run the `nav` subcommand.
    pub async fn run(self, ctx: SdContext) -> anyhow::Result<()> {
        match self {
            Self::Show(args) => args.run(ctx).await,
            Self::Save(args) => args.run(ctx).await,
        }
    }
}

//! The subcommands for the `sitedraft` application.

use crate::ctx::SdContext;
use clap::Subcommand;

mod draft;
mod nav;
mod site;

#[derive(Debug, Clone, Eq, PartialEq, Subcommand)]
pub enum Subcommands {
    /// Show the checked out branch and the draft state of the edited file.
    #[clap(alias = "st")]
    Status(site::StatusCmd),
    /// Print the edited file as it reads on the checked out branch.
    Show(site::ShowCmd),
    /// List the files that have an unpublished draft.
    #[clap(alias = "d")]
    Drafts(site::DraftsCmd),
    /// List the uploaded assets.
    #[clap(alias = "a")]
    Assets(site::AssetsCmd),
    /// List the layouts a new page may use.
    Layouts(site::LayoutsCmd),
    /// Print the front-matter defaults of the site root.
    Defaults(site::DefaultsCmd),
    /// Clone a template repository into a new site.
    Clone(site::CloneCmd),
    /// Save an edit of the file as a draft, opening a pull request for review.
    #[clap(alias = "s")]
    Save(draft::SaveCmd),
    /// Save an edit of the file and merge it into the default branch.
    #[clap(alias = "p")]
    Publish(draft::PublishCmd),
    /// Delete the file's draft branch.
    Discard(draft::DiscardCmd),
    /// Upload a local file under the upload root.
    #[clap(alias = "up")]
    Upload(draft::UploadCmd),
    /// Show or save the site navigation.
    #[clap(subcommand)]
    Nav(nav::NavCmd),
}

impl Subcommands {
    /// Run the subcommand with the given context.
    pub async fn run(self, ctx: SdContext) -> anyhow::Result<()> {
        match self {
            Self::Status(args) => args.run(ctx).await,
            Self::Show(args) => args.run(ctx).await,
            Self::Drafts(args) => args.run(ctx).await,
            Self::Assets(args) => args.run(ctx).await,
            Self::Layouts(args) => args.run(ctx).await,
            Self::Defaults(args) => args.run(ctx).await,
            Self::Clone(args) => args.run(ctx).await,
            Self::Save(args) => args.run(ctx).await,
            Self::Publish(args) => args.run(ctx).await,
            Self::Discard(args) => args.run(ctx).await,
            Self::Upload(args) => args.run(ctx).await,
            Self::Nav(cmd) => cmd.run(ctx).await,
        }
    }
}

//! `upload` subcommand.

use crate::{
    codec,
    ctx::SdContext,
    session::{CommitOutcome, Edit},
};
use anyhow::{anyhow, Result};
use clap::Args;
use nu_ansi_term::Color;
use std::path::PathBuf;

/// CLI arguments for the `upload` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct UploadCmd {
    /// The local file to upload
    path: PathBuf,
    /// Name of the asset under the upload root. Defaults to the local file name
    #[arg(long)]
    name: Option<String>,
    /// The commit message
    #[arg(long, short)]
    message: Option<String>,
}

impl UploadCmd {
    /// Run the `upload` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        let name = match self.name {
            Some(name) => name,
            None => self
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .map(ToOwned::to_owned)
                .ok_or(anyhow!("Cannot name an upload of {}", self.path.display()))?,
        };
        let payload = codec::encode_bytes(&std::fs::read(&self.path)?);

        let target = format!("{}/{}", ctx.session.upload_root(), name);
        let message = self
            .message
            .unwrap_or_else(|| format!("Uploading {}", name));
        let edit = Edit::base64(target, message, payload);

        if let CommitOutcome::Upload(entry) = ctx.session.commit(&edit).await? {
            println!(
                "Uploaded `{}` to `{}`.",
                Color::Green.paint(&name),
                Color::Blue.paint(entry.path)
            );
        }
        Ok(())
    }
}

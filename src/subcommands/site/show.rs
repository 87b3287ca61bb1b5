//! `show` subcommand.

use crate::{ctx::SdContext, remote::models::Contents};
use anyhow::{anyhow, Result};
use clap::Args;
use nu_ansi_term::Color;

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct ShowCmd;

impl ShowCmd {
    /// Run the `show` subcommand.
    pub async fn run(self, mut ctx: SdContext) -> Result<()> {
        match ctx.load().await? {
            Some(Contents::File(file)) => {
                print!("{}", file.decoded_content()?);
                Ok(())
            }
            Some(Contents::Directory(entries)) => {
                // A directory was selected. List it instead.
                for entry in entries {
                    println!("{}", Color::Blue.paint(entry.path));
                }
                Ok(())
            }
            None => Err(anyhow!("Select a file to show with `--file`.")),
        }
    }
}
